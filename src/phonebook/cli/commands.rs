use super::print::{
    line_width, print_messages, render_full_records, render_record_list, render_text_list,
};
use super::session::{self, Pass};
use super::setup::{Cli, Commands};
use clap::Parser;
use phonebook::api::{ConfigAction, PhonebookApi};
use phonebook::config::PhonebookConfig;
use phonebook::error::{PhonebookError, Result};
use phonebook::init::initialize;
use phonebook::input::Prompter;
use phonebook::launcher::{mailto_uri, open_uri, tel_uri};
use phonebook::model::Record;
use phonebook::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

pub(super) struct AppContext {
    pub api: PhonebookApi<FileStore>,
    pub config: PhonebookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List { query }) => handle_list(&ctx, query),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Edit {
            index,
            details,
            notes,
        }) => handle_edit(&mut ctx, index, details, notes),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Path { indexes }) => handle_paths(&ctx, indexes),
        Some(Commands::Mail { index, work }) => handle_mail(&ctx, index, work),
        Some(Commands::Call { index, work }) => handle_call(&ctx, index, work),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => session::run(&mut ctx, &mut Prompter::stdio()),
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> AppContext {
    let ctx = initialize(cli.home.clone());
    AppContext {
        api: ctx.api,
        config: ctx.config,
    }
}

fn handle_list(ctx: &AppContext, query: Vec<String>) -> Result<()> {
    let query = query.join(" ");
    let query = (!query.trim().is_empty()).then_some(query.as_str());
    let result = ctx.api.list_records(query)?;

    if !result.listed_records.is_empty() || result.messages.is_empty() {
        print!("{}", render_record_list(&result.listed_records, line_width()));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let mut prompter = Prompter::stdio();
    session::new_contact(ctx, &mut prompter)?;
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, details: bool, notes: bool) -> Result<()> {
    let record = single_record(ctx, &index)?;
    let passes: Vec<Pass> = if !details && !notes {
        vec![Pass::Basic]
    } else {
        [details.then_some(Pass::Details), notes.then_some(Pass::Notes)]
            .into_iter()
            .flatten()
            .collect()
    };

    let mut prompter = Prompter::stdio();
    session::edit_contact(ctx, &mut prompter, record, &passes)?;
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_records(&indexes)?;
    print!("{}", render_full_records(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_records(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.record_paths(&indexes)?;
    let lines: Vec<String> = result
        .record_paths
        .iter()
        .map(|path| path.display().to_string())
        .collect();
    print!("{}", render_text_list(&lines, "No contact paths found."));
    print_messages(&result.messages);
    Ok(())
}

fn handle_mail(ctx: &AppContext, index: String, work: bool) -> Result<()> {
    let record = single_record(ctx, &index)?;
    let contact = if work { &record.work } else { &record.private };
    let uri = mailto_uri(&contact.email).ok_or_else(|| {
        PhonebookError::Api(format!("{} has no email address", record.display_name()))
    })?;
    open_uri(&uri)
}

fn handle_call(ctx: &AppContext, index: String, work: bool) -> Result<()> {
    let record = single_record(ctx, &index)?;
    let contact = if work { &record.work } else { &record.private };
    let uri = contact.dial_number().and_then(tel_uri).ok_or_else(|| {
        PhonebookError::Api(format!("{} has no phone number", record.display_name()))
    })?;
    open_uri(&uri)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages);
    Ok(())
}

fn single_record(ctx: &AppContext, index: &str) -> Result<Record> {
    ctx.api
        .view_records(&[index])?
        .listed_records
        .into_iter()
        .next()
        .map(|dr| dr.record)
        .ok_or_else(|| PhonebookError::Api(format!("Index {} not found", index)))
}
