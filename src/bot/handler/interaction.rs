//! Interaction handlers for the `/loot` command.
//!
//! Slash commands are flattened into typed requests, checked against the moderation gate
//! when they change allocation state, and executed through the service layer. Autocomplete
//! requests are answered from the item catalog (or the user's own votes when withdrawing),
//! and the withdrawal picker is a string select menu whose custom id carries a
//! [`CorrelationToken`].

use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateActionRow, CreateAutocompleteResponse, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, Interaction, ResolvedOption, ResolvedValue,
};

use crate::{
    bot::{
        command::{
            request::{ArgValue, CommandArgs, LootCommand},
            token::{CorrelationToken, TokenAction},
        },
        handler::Handler,
        response::{self, Reply},
    },
    error::AppError,
    model::{moderation::PermissionSnapshot, vote::SubmitVoteParam},
    service::{
        allocation::AllocationService, moderation::ModerationGate, registry::ItemRegistryService,
        vote::VoteService, win::WinLedgerService,
    },
};

/// Maximum number of choices Discord accepts in an autocomplete response.
const AUTOCOMPLETE_LIMIT: usize = 25;

/// Routes an interaction to its handler.
pub async fn handle_interaction(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) if command.data.name == "loot" => {
            handle_command(handler, ctx, command).await
        }
        Interaction::Autocomplete(command) if command.data.name == "loot" => {
            handle_autocomplete(handler, ctx, command).await
        }
        Interaction::Component(component) => handle_component(handler, ctx, component).await,
        _ => {}
    }
}

async fn handle_command(handler: &Handler, ctx: Context, command: CommandInteraction) {
    let reply = match run_command(handler, &ctx, &command).await {
        Ok(reply) => reply,
        Err(e) => Reply::private(e.user_message()),
    };

    let message = match build_message(reply) {
        Ok(message) => message,
        Err(e) => CreateInteractionResponseMessage::new()
            .content(e.user_message())
            .ephemeral(true),
    };

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!("Failed to respond to command: {:?}", e);
    }
}

async fn run_command(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<Reply, AppError> {
    let guild_id = command
        .guild_id
        .ok_or_else(|| AppError::BadRequest("Loot commands only work in servers.".to_string()))?;
    let user_id = command.user.id.get();

    let request = LootCommand::parse(&command_args(command)?)?;

    tracing::debug!(
        guild_id = guild_id.get(),
        user_id,
        "Received loot command {:?}",
        request
    );

    if request.is_moderated() {
        let member = command
            .member
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("Could not read your permissions.".to_string()))?;
        let is_owner = ctx
            .cache
            .guild(guild_id)
            .is_some_and(|guild| guild.owner_id == command.user.id);

        let snapshot = PermissionSnapshot::from_member(member, is_owner);
        ModerationGate::new(&handler.policy.moderation).require(&snapshot)?;
    }

    execute(handler, guild_id.get(), user_id, request).await
}

/// Runs a parsed command against the ledger.
async fn execute(
    handler: &Handler,
    guild_id: u64,
    user_id: u64,
    request: LootCommand,
) -> Result<Reply, AppError> {
    let db = &handler.db;
    let policy = &handler.policy;

    let reply = match request {
        LootCommand::Vote { item, reason } => {
            let outcome = VoteService::new(db, policy.vote_window)
                .submit_vote(SubmitVoteParam {
                    guild_id,
                    user_id,
                    item_name: item,
                    reason,
                })
                .await?;
            Reply::public(response::vote_accepted(&outcome))
        }
        LootCommand::Withdraw { item: Some(item) } => {
            let outcome = VoteService::new(db, policy.vote_window)
                .withdraw_vote(guild_id, user_id, &item)
                .await?;
            Reply::private(response::withdrawn(&item, &outcome))
        }
        LootCommand::Withdraw { item: None } => {
            let votes = VoteService::new(db, policy.vote_window)
                .list_user_active_votes(guild_id, user_id)
                .await?;
            if votes.is_empty() {
                Reply::private("You have no active votes.")
            } else {
                Reply {
                    content: "Pick the vote to withdraw:".to_string(),
                    ephemeral: true,
                    picker: Some(response::withdraw_picker(
                        CorrelationToken::withdraw(guild_id, user_id),
                        &votes,
                    )),
                }
            }
        }
        LootCommand::Votes { item } => {
            let votes = VoteService::new(db, policy.vote_window)
                .list_active_votes_for_item(guild_id, &item)
                .await?;
            Reply::public(response::active_votes(&item, &votes))
        }
        LootCommand::Roll { item } => {
            let result = AllocationService::new(db, policy)
                .draw(guild_id, &item, true)
                .await?;
            Reply::public(response::draw_result(&result))
        }
        LootCommand::RollAll => {
            let results = AllocationService::new(db, policy)
                .draw_all_open(guild_id, true)
                .await?;
            Reply::public(response::batch_result(&results))
        }
        LootCommand::Reroll { item } => {
            let result = AllocationService::new(db, policy)
                .reroll(guild_id, &item, true)
                .await?;
            Reply::public(response::reroll_result(&result))
        }
        LootCommand::Wins { user_id: target } => {
            let target = target.unwrap_or(user_id);
            let wins = WinLedgerService::new(db).get(guild_id, target).await?;
            Reply::public(response::wins(target, wins))
        }
        LootCommand::SetWins {
            user_id: target,
            wins,
        } => {
            let record = WinLedgerService::new(db)
                .set_absolute(guild_id, target, wins)
                .await?;
            Reply::public(response::wins_set(&record))
        }
        LootCommand::Leaderboard { limit } => {
            let records = WinLedgerService::new(db).leaderboard(guild_id, limit).await?;
            Reply::public(response::leaderboard(&records))
        }
        LootCommand::Clear => {
            let outcome = ItemRegistryService::new(db, policy.vote_window)
                .clear_community(guild_id)
                .await?;
            Reply::public(response::cleared(&outcome))
        }
        LootCommand::ResetWins => {
            let deleted = WinLedgerService::new(db).reset_community(guild_id).await?;
            Reply::public(response::wins_reset(deleted))
        }
    };

    Ok(reply)
}

/// Flattens the resolved options of a `/loot` invocation.
fn command_args(command: &CommandInteraction) -> Result<CommandArgs, AppError> {
    let Some(ResolvedOption {
        name,
        value: ResolvedValue::SubCommand(options),
        ..
    }) = command.data.options().into_iter().next()
    else {
        return Err(AppError::BadRequest("Missing subcommand.".to_string()));
    };

    let mut args = CommandArgs::new(name);
    for option in options {
        let value = match option.value {
            ResolvedValue::String(value) => ArgValue::String(value.to_string()),
            ResolvedValue::Integer(value) => ArgValue::Integer(value),
            ResolvedValue::User(user, _) => ArgValue::User(user.id.get()),
            ResolvedValue::Autocomplete { value, .. } => ArgValue::String(value.to_string()),
            _ => continue,
        };
        args = args.with(option.name, value);
    }

    Ok(args)
}

fn build_message(reply: Reply) -> Result<CreateInteractionResponseMessage, AppError> {
    let mut message = CreateInteractionResponseMessage::new()
        .content(reply.content)
        .ephemeral(reply.ephemeral);

    if let Some(picker) = reply.picker {
        let options = picker
            .options
            .into_iter()
            .map(|(label, value)| CreateSelectMenuOption::new(label, value))
            .collect();
        let menu = CreateSelectMenu::new(
            picker.token.encode()?,
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Vote to withdraw");

        message = message.components(vec![CreateActionRow::SelectMenu(menu)]);
    }

    Ok(message)
}

async fn handle_autocomplete(handler: &Handler, ctx: Context, command: CommandInteraction) {
    let Some(focused) = command.data.autocomplete() else {
        return;
    };
    let query = focused.value.to_string();

    let withdrawing = command
        .data
        .options
        .first()
        .is_some_and(|option| option.name == "withdraw");

    let choices: Vec<(String, String)> = match (withdrawing, command.guild_id) {
        (true, Some(guild_id)) => {
            match VoteService::new(&handler.db, handler.policy.vote_window)
                .list_user_active_votes(guild_id.get(), command.user.id.get())
                .await
            {
                Ok(votes) => {
                    let needle = query.to_lowercase();
                    votes
                        .into_iter()
                        .filter(|v| v.display_name.to_lowercase().contains(&needle))
                        .take(AUTOCOMPLETE_LIMIT)
                        .map(|v| (v.display_name, v.item_slug))
                        .collect()
                }
                Err(e) => {
                    tracing::error!("Failed to list votes for autocomplete: {}", e);
                    Vec::new()
                }
            }
        }
        _ => handler
            .catalog
            .search(&query, AUTOCOMPLETE_LIMIT)
            .into_iter()
            .map(|name| (name.to_string(), name.to_string()))
            .collect(),
    };

    let response = choices
        .into_iter()
        .fold(CreateAutocompleteResponse::new(), |response, (name, value)| {
            response.add_string_choice(name, value)
        });

    if let Err(e) = command
        .create_response(&ctx.http, CreateInteractionResponse::Autocomplete(response))
        .await
    {
        tracing::error!("Failed to respond to autocomplete: {:?}", e);
    }
}

async fn handle_component(handler: &Handler, ctx: Context, component: ComponentInteraction) {
    let content = match run_component(handler, &component).await {
        Ok(content) => content,
        Err(e) => e.user_message(),
    };

    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .components(Vec::new());

    if let Err(e) = component
        .create_response(&ctx.http, CreateInteractionResponse::UpdateMessage(message))
        .await
    {
        tracing::error!("Failed to respond to component: {:?}", e);
    }
}

async fn run_component(
    handler: &Handler,
    component: &ComponentInteraction,
) -> Result<String, AppError> {
    let token = CorrelationToken::decode(&component.data.custom_id)?;

    if token.user_id != component.user.id.get() {
        return Err(AppError::BadRequest(
            "This menu belongs to someone else.".to_string(),
        ));
    }

    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        return Err(AppError::BadRequest("Unexpected component.".to_string()));
    };
    let slug = values
        .first()
        .ok_or_else(|| AppError::BadRequest("Nothing was selected.".to_string()))?;

    match token.action {
        TokenAction::Withdraw => {
            let outcome = VoteService::new(&handler.db, handler.policy.vote_window)
                .withdraw_vote(token.guild_id, token.user_id, slug)
                .await?;

            Ok(response::withdrawn(slug, &outcome))
        }
    }
}
