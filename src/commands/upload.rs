use tracing::{info, warn};

use crate::state::Context;

/// Upload a text document for indexing
#[poise::command(slash_command, guild_only)]
pub async fn upload(
    ctx: Context<'_>,
    #[description = "Document text"] text: String,
    #[description = "Document title (optional)"] title: Option<String>,
) -> Result<(), anyhow::Error> {
    ctx.defer().await?;

    let submission = {
        let mut panel = ctx.data().upload.lock().await;
        panel.set_text(text);
        panel.set_title(title.unwrap_or_default());
        match panel.begin_submit() {
            Ok(submission) => submission,
            Err(e) => {
                // Guard or validation failure: nothing was sent.
                ctx.say(format!("{}", e)).await?;
                return Ok(());
            }
        }
    };
    // Lock released: the query panel stays usable while this runs.

    info!(
        user = ctx.author().name,
        title = submission.title,
        bytes = submission.text.len(),
        "Upload started"
    );

    match ctx.data().api.submit_document(&submission).await {
        Ok(()) => {
            ctx.data().upload.lock().await.finish_success();
            // The corpus changed; whatever answer we were holding is stale.
            ctx.data().clear_answer().await;

            info!(title = submission.title, "Upload accepted");
            ctx.say(format!(
                "Uploaded **{}** ({} bytes). Ask away — any previous answer was cleared.",
                submission.title,
                submission.text.len()
            ))
            .await?;
        }
        Err(e) => {
            ctx.data().upload.lock().await.finish_failure();

            warn!(error = %e, "Upload failed");
            ctx.say(format!("Upload failed: {}", e.detail())).await?;
        }
    }

    Ok(())
}
