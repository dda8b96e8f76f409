mod answer;
mod ask;
mod upload;

use crate::state::Context;

/// RAG assistant - upload documents and ask questions against them
#[poise::command(
    slash_command,
    subcommands("upload::upload", "ask::ask", "answer::answer")
)]
pub async fn rag(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}

/// Send a message in Discord-safe chunks (max 1990 bytes).
/// Uses ctx.say() for all chunks — poise routes follow-ups through the
/// interaction webhook, which doesn't require Send Messages channel permission.
pub(crate) async fn send_chunked(ctx: &Context<'_>, text: &str) -> Result<(), anyhow::Error> {
    for chunk in split_chunks(text, 1990) {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// Split a message at the size limit, preferring newline then space breaks
/// and never cutting inside a multibyte character.
fn split_chunks(text: &str, limit: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut remaining = text;
    while !remaining.is_empty() {
        if remaining.len() <= limit {
            chunks.push(remaining);
            break;
        }

        // Walk the cut point back to a char boundary before slicing.
        let mut end = limit;
        while !remaining.is_char_boundary(end) {
            end -= 1;
        }

        let split_at = remaining[..end]
            .rfind('\n')
            .or_else(|| remaining[..end].rfind(' '))
            .map(|i| i + 1)
            .unwrap_or(end);
        chunks.push(&remaining[..split_at]);
        remaining = &remaining[split_at..];
    }
    chunks
}
