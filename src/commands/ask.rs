use tracing::{info, warn};

use crate::commands::send_chunked;
use crate::render;
use crate::state::Context;

/// Ask a question about the uploaded documents
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
) -> Result<(), anyhow::Error> {
    ctx.defer().await?;

    let request = {
        let mut panel = ctx.data().query.lock().await;
        panel.set_query(question);
        match panel.begin_submit() {
            Ok(request) => request,
            Err(e) => {
                // Guard or validation failure: nothing was sent.
                ctx.say(format!("{}", e)).await?;
                return Ok(());
            }
        }
    };

    info!(user = ctx.author().name, query = request.query, "Query started");

    match ctx.data().api.submit_query(&request).await {
        Ok(response) => {
            ctx.data().query.lock().await.finish_success();

            info!(
                citations = response.citations.len(),
                chunks = response.retrieved_chunks.len(),
                tokens = response.token_estimate.total,
                "Query complete"
            );

            let message = render::to_markdown(&render::render(Some(&response)));
            ctx.data().set_answer(response).await;
            send_chunked(&ctx, &message).await?;
        }
        Err(e) => {
            ctx.data().query.lock().await.finish_failure();

            // The previously held answer stays exactly as it was.
            warn!(error = %e, "Query failed");
            ctx.say(format!("Query failed: {}", e.detail())).await?;
        }
    }

    Ok(())
}
