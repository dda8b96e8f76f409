use crate::commands::send_chunked;
use crate::render;
use crate::state::Context;

/// Show the currently held answer
#[poise::command(slash_command, guild_only)]
pub async fn answer(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let current = ctx.data().current_answer().await;
    let message = render::to_markdown(&render::render(current.as_ref()));
    send_chunked(&ctx, &message).await
}
