//! Interaction event handler.
//!
//! Converts slash commands and announcement button presses into `BotEvent`s, runs them
//! through `dispatch` and answers every interaction with an ephemeral reply.
//!
//! Discord expects the first response within three seconds, while a button press may
//! queue behind other presses refreshing the same announcement. Every interaction is
//! therefore acknowledged with a deferred ephemeral response before dispatch, and the
//! reply is filled in with `edit_response` once the outcome is known.

use dioxus_logger::tracing;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, GuildId, Interaction, Member,
    UserId,
};

use crate::{
    bot::event,
    model::event::{Actor, BotEvent},
    state::AppState,
};

use super::dispatch::dispatch;

/// Handles an incoming interaction.
///
/// Interactions other than slash commands and giveaway buttons are ignored.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for responding
/// - `interaction` - The interaction received from the gateway
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(state, &ctx, command).await,
        Interaction::Component(component) => handle_component(state, &ctx, component).await,
        _ => {}
    }
}

async fn handle_command(state: &AppState, ctx: &Context, command: CommandInteraction) {
    let actor = actor(command.user.id, command.guild_id, command.member.as_deref());

    tracing::debug!(
        "Command /{} invoked by {}",
        command.data.name,
        command.user.id
    );

    if let Err(e) = command.create_response(&ctx.http, deferred_reply()).await {
        tracing::error!(
            "Failed to acknowledge /{} from {}: {}",
            command.data.name,
            command.user.id,
            e
        );
        return;
    }

    let outcome = match event::parse_command(&command.data.name, &command.data.options) {
        Ok(parsed) => dispatch(state, BotEvent::CommandInvoked(parsed), actor).await,
        Err(e) => Err(e),
    };
    let content = outcome.unwrap_or_else(|e| e.user_message());

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!(
            "Failed to respond to /{} from {}: {}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

async fn handle_component(state: &AppState, ctx: &Context, component: ComponentInteraction) {
    let Some(parsed) = event::parse_component(
        &component.data.custom_id,
        component.message.id.get(),
        component.user.id.get(),
    ) else {
        return;
    };

    if let Err(e) = component.create_response(&ctx.http, deferred_reply()).await {
        tracing::error!(
            "Failed to acknowledge button {} from {}: {}",
            component.data.custom_id,
            component.user.id,
            e
        );
        return;
    }

    let actor = actor(component.user.id, component.guild_id, component.member.as_ref());
    let content = dispatch(state, parsed, actor)
        .await
        .unwrap_or_else(|e| e.user_message());

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!(
            "Failed to respond to button {} from {}: {}",
            component.data.custom_id,
            component.user.id,
            e
        );
    }
}

/// Builds the actor from the interaction's resolved member permissions.
///
/// Outside a guild there are no member permissions, so staff commands are refused.
fn actor(user_id: UserId, guild_id: Option<GuildId>, member: Option<&Member>) -> Actor {
    Actor {
        user_id: user_id.get(),
        guild_id: guild_id.map(|id| id.get()),
        can_manage_messages: member
            .and_then(|member| member.permissions)
            .is_some_and(|permissions| permissions.manage_messages()),
    }
}

/// Acknowledges an interaction with an ephemeral "thinking" state.
///
/// The deferred response is later replaced by the actual reply, which stays ephemeral.
fn deferred_reply() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}
