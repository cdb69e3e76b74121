//! Registration payload of the `/loot` command.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::{bot::command::request::MAX_LEADERBOARD_LIMIT, model::reason::PriorityReason};

fn item_option(description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "item", description)
        .required(required)
        .set_autocomplete(true)
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

/// Builds the `/loot` command with all of its subcommands.
pub fn loot_command() -> CreateCommand {
    let reason = PriorityReason::ALL.iter().fold(
        CreateCommandOption::new(CommandOptionType::String, "reason", "Why you want the item")
            .required(true),
        |option, reason| option.add_string_choice(reason.as_str(), reason.as_str()),
    );

    CreateCommand::new("loot")
        .description("Vote on and allocate loot")
        .default_member_permissions(Permissions::SEND_MESSAGES)
        .add_option(
            subcommand("vote", "Register your interest in an item")
                .add_sub_option(item_option("Item you want", true))
                .add_sub_option(reason),
        )
        .add_option(
            subcommand("withdraw", "Withdraw one of your votes")
                .add_sub_option(item_option("Item to withdraw from, or pick from a list", false)),
        )
        .add_option(
            subcommand("votes", "List the active votes on an item")
                .add_sub_option(item_option("Item to inspect", true)),
        )
        .add_option(
            subcommand("roll", "Draw a winner for an item")
                .add_sub_option(item_option("Item to roll", true)),
        )
        .add_option(subcommand("rollall", "Draw winners for every open item"))
        .add_option(
            subcommand("reroll", "Draw the item again, moving the win if the winner changes")
                .add_sub_option(item_option("Item to re-roll", true)),
        )
        .add_option(
            subcommand("wins", "Show a win count").add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Defaults to you"),
            ),
        )
        .add_option(
            subcommand("setwins", "Overwrite a win count")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, "user", "Member to adjust")
                        .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "wins", "New win count")
                        .required(true)
                        .min_int_value(0),
                ),
        )
        .add_option(
            subcommand("leaderboard", "Show who has won the most").add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "limit", "Rows to show")
                    .min_int_value(1)
                    .max_int_value(MAX_LEADERBOARD_LIMIT),
            ),
        )
        .add_option(subcommand("clear", "Delete every vote and item, keeping win counts"))
        .add_option(subcommand("resetwins", "Reset every win count to zero"))
}
