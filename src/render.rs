use crate::api::types::AnswerResponse;

/// One titled block of the rendered answer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

impl Section {
    fn new(heading: &str, body: String) -> Self {
        Self {
            heading: heading.to_string(),
            body,
        }
    }
}

/// Render an answer (or its absence) into an ordered list of sections.
///
/// Pure view logic: no I/O, and citations and chunks appear exactly in the
/// order the backend sent them.
pub fn render(response: Option<&AnswerResponse>) -> Vec<Section> {
    let Some(resp) = response else {
        return vec![Section::new(
            "Answer",
            "Enter a query to get an answer...".to_string(),
        )];
    };

    // Answer text verbatim, embedded line breaks included.
    let mut sections = vec![Section::new("Answer", resp.answer.clone())];

    if !resp.citations.is_empty() {
        let mut body = String::new();
        for citation in &resp.citations {
            let label = citation.title.as_deref().unwrap_or(&citation.source);
            body.push_str(&format!("**[{}]** {}", citation.id, label));
            if let Some(section) = &citation.section {
                body.push_str(&format!(" - {}", section));
            }
            body.push('\n');
            body.push_str(&citation.text);
            body.push('\n');
        }
        sections.push(Section::new("Citations", body.trim_end().to_string()));
    }

    if !resp.retrieved_chunks.is_empty() {
        let mut body = String::new();
        for chunk in &resp.retrieved_chunks {
            let label = chunk.title.as_deref().unwrap_or(&chunk.source);
            body.push_str(label);
            if let Some(section) = &chunk.section {
                body.push_str(&format!(" - {}", section));
            }
            body.push_str(&format!(" (score: {:.3})\n", chunk.score));
            body.push_str(&chunk.text);
            body.push('\n');
        }
        sections.push(Section::new("Retrieved Chunks", body.trim_end().to_string()));
    }

    let timing = |key: &str| resp.timing.get(key).copied().unwrap_or(0.0);
    let mut metrics = format!(
        "Total Time: {}\nRetrieval: {}\nLLM Generation: {}\nTokens: {}",
        format_duration(timing("total")),
        format_duration(timing("total_retrieval")),
        format_duration(timing("llm_generation")),
        group_thousands(resp.token_estimate.total),
    );
    if let Some(cost) = resp.cost_estimate {
        if cost > 0.0 {
            metrics.push_str(&format!("\nEstimated Cost: ${:.4}", cost));
        }
    }
    sections.push(Section::new("Performance Metrics", metrics));

    sections
}

/// Flatten sections into one chat message.
pub fn to_markdown(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("**{}**\n{}", s.heading, s.body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Sub-second durations read better in milliseconds; exactly one second and
/// up renders in seconds.
pub fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        format!("{}ms", (seconds * 1000.0).round() as i64)
    } else {
        format!("{:.2}s", seconds)
    }
}

/// Insert `,` thousands separators.
pub fn group_thousands(n: i64) -> String {
    let raw = n.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::api::types::{Citation, RetrievedChunk, TokenEstimate};

    use super::*;

    fn base_response() -> AnswerResponse {
        AnswerResponse {
            answer: "RAG combines retrieval and generation [1].".to_string(),
            citations: vec![],
            retrieved_chunks: vec![],
            timing: HashMap::new(),
            token_estimate: TokenEstimate {
                input: 50,
                output: 30,
                total: 80,
            },
            cost_estimate: None,
        }
    }

    fn heading_index(sections: &[Section], heading: &str) -> Option<usize> {
        sections.iter().position(|s| s.heading == heading)
    }

    #[test]
    fn test_absent_answer_renders_placeholder_only() {
        let sections = render(None);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].body, "Enter a query to get an answer...");
    }

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration(0.4), "400ms");
        assert_eq!(format_duration(1.0), "1.00s");
        assert_eq!(format_duration(2.345), "2.35s");
        assert_eq!(format_duration(0.0), "0ms");
        assert_eq!(format_duration(0.9995), "1000ms");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(80), "80");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_empty_lists_hide_their_sections_independently() {
        let mut resp = base_response();
        let sections = render(Some(&resp));
        assert!(heading_index(&sections, "Citations").is_none());
        assert!(heading_index(&sections, "Retrieved Chunks").is_none());

        resp.citations.push(Citation {
            id: 7,
            text: "cited text".to_string(),
            source: "doc.txt".to_string(),
            title: None,
            section: None,
        });
        let sections = render(Some(&resp));
        assert!(heading_index(&sections, "Citations").is_some());
        assert!(heading_index(&sections, "Retrieved Chunks").is_none());
    }

    #[test]
    fn test_citations_keep_list_order_not_id_order() {
        let mut resp = base_response();
        for id in [9, 2] {
            resp.citations.push(Citation {
                id,
                text: format!("text {}", id),
                source: "doc.txt".to_string(),
                title: None,
                section: None,
            });
        }

        let sections = render(Some(&resp));
        let body = &sections[heading_index(&sections, "Citations").unwrap()].body;
        let nine = body.find("[9]").unwrap();
        let two = body.find("[2]").unwrap();
        assert!(nine < two, "citations must follow list order");
    }

    #[test]
    fn test_citation_label_prefers_title_over_source() {
        let mut resp = base_response();
        resp.citations.push(Citation {
            id: 1,
            text: "t".to_string(),
            source: "doc.txt".to_string(),
            title: Some("Handbook".to_string()),
            section: Some("Intro".to_string()),
        });

        let sections = render(Some(&resp));
        let body = &sections[heading_index(&sections, "Citations").unwrap()].body;
        assert!(body.contains("**[1]** Handbook - Intro"));
        assert!(!body.contains("doc.txt"));
    }

    #[test]
    fn test_metrics_default_missing_timings_to_zero() {
        let resp = base_response();
        let sections = render(Some(&resp));
        let body = &sections[heading_index(&sections, "Performance Metrics").unwrap()].body;

        assert!(body.contains("Total Time: 0ms"));
        assert!(body.contains("Retrieval: 0ms"));
        assert!(body.contains("LLM Generation: 0ms"));
        assert!(body.contains("Tokens: 80"));
    }

    #[test]
    fn test_cost_rendered_only_when_positive() {
        let mut resp = base_response();
        for absent in [None, Some(0.0), Some(-0.5)] {
            resp.cost_estimate = absent;
            let sections = render(Some(&resp));
            let body = &sections[heading_index(&sections, "Performance Metrics").unwrap()].body;
            assert!(!body.contains("Estimated Cost"));
        }

        resp.cost_estimate = Some(0.0213);
        let sections = render(Some(&resp));
        let body = &sections[heading_index(&sections, "Performance Metrics").unwrap()].body;
        assert!(body.contains("Estimated Cost: $0.0213"));
    }

    #[test]
    fn test_full_answer_scenario() {
        let mut resp = base_response();
        resp.citations.push(Citation {
            id: 1,
            text: "...".to_string(),
            source: "doc.txt".to_string(),
            title: None,
            section: None,
        });
        resp.retrieved_chunks.push(RetrievedChunk {
            text: "...".to_string(),
            source: "doc.txt".to_string(),
            title: None,
            section: None,
            position: 0,
            score: 0.912,
            metadata: HashMap::new(),
        });
        resp.timing.insert("total".to_string(), 0.8);
        resp.timing.insert("total_retrieval".to_string(), 0.1);
        resp.timing.insert("llm_generation".to_string(), 0.7);

        let sections = render(Some(&resp));
        assert_eq!(
            sections[0].body,
            "RAG combines retrieval and generation [1]."
        );

        let citations = &sections[heading_index(&sections, "Citations").unwrap()].body;
        assert!(citations.contains("**[1]** doc.txt"));

        let chunks = &sections[heading_index(&sections, "Retrieved Chunks").unwrap()].body;
        assert!(chunks.contains("(score: 0.912)"));

        let metrics = &sections[heading_index(&sections, "Performance Metrics").unwrap()].body;
        assert!(metrics.contains("Total Time: 800ms"));
        assert!(metrics.contains("Retrieval: 100ms"));
        assert!(metrics.contains("LLM Generation: 700ms"));
        assert!(metrics.contains("Tokens: 80"));
        assert!(!metrics.contains("Estimated Cost"));
    }

    #[test]
    fn test_answer_line_breaks_preserved() {
        let mut resp = base_response();
        resp.answer = "First line.\nSecond line.".to_string();
        let sections = render(Some(&resp));
        assert_eq!(sections[0].body, "First line.\nSecond line.");

        let markdown = to_markdown(&sections);
        assert!(markdown.contains("First line.\nSecond line."));
    }
}
