//! Message components attached to giveaway announcements.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton};

/// Custom ID of the button that enrolls the presser.
pub const ENTER_BUTTON_ID: &str = "giveaway_enter";
/// Custom ID of the button that withdraws the presser.
pub const LEAVE_BUTTON_ID: &str = "giveaway_leave";

/// Builds the enter/leave button row shown on open giveaways.
pub fn giveaway_buttons() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ENTER_BUTTON_ID)
            .label("Enter Giveaway")
            .style(ButtonStyle::Primary),
        CreateButton::new(LEAVE_BUTTON_ID)
            .label("Leave Giveaway")
            .style(ButtonStyle::Secondary),
    ])
}
