// lexdesk - a legal workspace that remembers what you asked
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use anyhow::Context;
use chrono::Utc;
use lexdesk_lib::{
    config::default_config_path,
    core::{format_relative, Composer, Destination, EntryId, NavigationRequest, NavigationScheduler},
    logging::init_tracing,
    palette::{CommandPalette, PaletteKey, PaletteOutcome, PaletteSection},
    DeskConfig, DeskError, DeskSession,
};
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Grab whatever the user typed, minus the global flags
    let (args, verbose, config_path) = split_global_flags(env::args().collect());

    init_tracing(verbose).context("failed to set up logging")?;

    let config = DeskConfig::load(config_path.as_deref()).context("failed to load configuration")?;

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "classify" => handle_classify(&args[2..], &config),
        "ask" => handle_ask(&args[2..], &config).await,
        "recent" => handle_recent(&config),
        "palette" => handle_palette(&args[2..], &config),
        "shell" => handle_shell(&config).await,
        "config" => handle_config(&config),
        "version" | "-v" | "--version" => {
            println!("lexdesk v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

// Pull --verbose and --config <path> out from anywhere in the arg list
fn split_global_flags(args: Vec<String>) -> (Vec<String>, bool, Option<PathBuf>) {
    let mut rest = Vec::new();
    let mut verbose = false;
    let mut config_path = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" => verbose = true,
            "--config" => config_path = iter.next().map(PathBuf::from),
            _ => rest.push(arg),
        }
    }

    (rest, verbose, config_path)
}

fn handle_classify(args: &[String], config: &DeskConfig) -> anyhow::Result<()> {
    let text = args.join(" ");
    let composer = Composer::new(config.title_max_chars);

    let submission = match composer.prepare(&text) {
        Ok(submission) => submission,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            return Ok(());
        }
    };

    let style = submission.intent.category.style();
    println!(
        "{} {} → {} ({})",
        style.icon,
        style.label,
        submission.intent.destination,
        submission.intent.destination.route()
    );
    match composer.explain(&submission.full_query) {
        Some(keyword) => println!("   matched keyword: '{}'", keyword),
        None => println!("   no keyword matched, using the default"),
    }

    Ok(())
}

async fn handle_ask(args: &[String], config: &DeskConfig) -> anyhow::Result<()> {
    let mut session = DeskSession::new(config);

    let request = match session.submit(&args.join(" ")) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("✗ {}", e.user_message());
            return Ok(());
        }
    };

    let (mut scheduler, mut navigations) = NavigationScheduler::new(config.thinking_delay());
    println!("Thinking...");
    scheduler.schedule(request);

    if let Some(request) = navigations.recv().await {
        print_navigation(&request);
    }
    print_recent(&session);

    scheduler.teardown();
    session.teardown();
    Ok(())
}

fn handle_recent(config: &DeskConfig) -> anyhow::Result<()> {
    let session = DeskSession::new(config);
    print_recent(&session);
    session.teardown();
    Ok(())
}

fn handle_palette(args: &[String], config: &DeskConfig) -> anyhow::Result<()> {
    let session = DeskSession::new(config);
    let mut palette = session.palette(Utc::now());
    palette.set_query(&args.join(" "));
    print_palette(&palette);
    session.teardown();
    Ok(())
}

fn handle_config(config: &DeskConfig) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    if let Some(path) = default_config_path() {
        let status = if path.exists() { "found" } else { "not found" };
        println!("\nConfig file: {} ({})", path.display(), status);
    }
    Ok(())
}

enum ShellFlow {
    Continue,
    Quit,
}

async fn handle_shell(config: &DeskConfig) -> anyhow::Result<()> {
    let mut session = DeskSession::new(config);
    let (mut scheduler, mut navigations) = NavigationScheduler::new(config.thinking_delay());
    let mut palette: Option<CommandPalette> = None;

    println!("lexdesk shell. Type a request, or :help for commands.");
    print_recent(&session);
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let flow = handle_shell_line(line.trim(), &mut session, &mut scheduler, &mut palette);
                if let ShellFlow::Quit = flow {
                    break;
                }
                prompt();
            }
            Some(request) = navigations.recv() => {
                print_navigation(&request);
                prompt();
            }
        }
    }

    // Anything still thinking is dropped on the floor
    scheduler.teardown();
    session.teardown();
    println!("\nBye.");
    Ok(())
}

fn handle_shell_line(
    line: &str,
    session: &mut DeskSession,
    scheduler: &mut NavigationScheduler,
    palette: &mut Option<CommandPalette>,
) -> ShellFlow {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let result: lexdesk_lib::Result<()> = match command {
        ":quit" | ":q" | ":exit" => return ShellFlow::Quit,
        ":help" => {
            print_shell_help();
            Ok(())
        }
        ":recent" => {
            print_recent(session);
            Ok(())
        }
        ":open" => recent_at(session, rest).map(|id| {
            if let Some(request) = session.open_recent(&id) {
                println!("Reopening...");
                scheduler.schedule(request);
            }
        }),
        ":remove" => recent_at(session, rest).map(|id| {
            session.remove_recent(&id);
            print_recent(session);
        }),
        ":clear" => {
            session.clear_history();
            println!("History cleared.");
            Ok(())
        }
        ":new" => parse_destination(rest).map(|destination| {
            scheduler.cancel();
            print_navigation(&session.land_on(destination));
        }),
        ":palette" => {
            let mut fresh = session.palette(Utc::now());
            fresh.set_query(rest);
            print_palette(&fresh);
            *palette = Some(fresh);
            Ok(())
        }
        ":go" | ":shortcut" => pick_from_palette(command, rest, session, scheduler, palette),
        _ if command.starts_with(':') => Err(DeskError::Generic(format!(
            "Unknown command '{}'. Try :help",
            command
        ))),
        _ => session.submit(line).map(|request| {
            println!("Thinking...");
            scheduler.schedule(request);
        }),
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e.user_message());
    }

    ShellFlow::Continue
}

// Pick from the last palette by position or by suggestion shortcut
fn pick_from_palette(
    command: &str,
    rest: &str,
    session: &mut DeskSession,
    scheduler: &mut NavigationScheduler,
    palette: &mut Option<CommandPalette>,
) -> lexdesk_lib::Result<()> {
    let Some(current) = palette.as_mut().filter(|p| p.is_open()) else {
        return Err(DeskError::Generic(
            "Open the palette first with :palette".to_string(),
        ));
    };

    let number = parse_position(rest)?;
    let outcome = if command == ":shortcut" {
        current.handle_key(PaletteKey::Shortcut(number))
    } else {
        current.select(number)
    };

    match outcome {
        PaletteOutcome::Activated(action) => {
            if let Some(request) = session.apply_palette_action(action)? {
                scheduler.schedule(request);
            }
            Ok(())
        }
        _ => Err(DeskError::EntryNotFound(rest.to_string())),
    }
}

fn parse_position(text: &str) -> lexdesk_lib::Result<usize> {
    text.parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| DeskError::EntryNotFound(text.to_string()))
}

// 1-based position in the sidebar list
fn recent_at(session: &DeskSession, text: &str) -> lexdesk_lib::Result<EntryId> {
    let position = parse_position(text)?;
    session
        .tracker()
        .list()
        .get(position - 1)
        .map(|entry| entry.id)
        .ok_or_else(|| DeskError::EntryNotFound(text.to_string()))
}

fn parse_destination(text: &str) -> lexdesk_lib::Result<Destination> {
    match text.to_lowercase().as_str() {
        "" | "ask" => Ok(Destination::Ask),
        "draft" => Ok(Destination::Draft),
        "automate" => Ok(Destination::Automate),
        other => Err(DeskError::Generic(format!(
            "Unknown page '{}'. Use ask, draft or automate",
            other
        ))),
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn print_navigation(request: &NavigationRequest) {
    println!("\n→ {} ({})", request.destination, request.destination.route());
    match (&request.query, request.category) {
        (Some(query), Some(category)) => {
            let origin = if request.from_recent { "recent" } else { "new" };
            println!("  {} {} request: {}", category.style().icon, origin, query);
        }
        _ => println!("  Ready for a new request"),
    }
}

fn print_recent(session: &DeskSession) {
    let tracker = session.tracker();
    let now = Utc::now();

    if tracker.is_empty() {
        println!("\nNo recent requests.");
        return;
    }

    println!("\nRecent:");
    println!("{}", "=".repeat(60));
    for (i, entry) in tracker.list().iter().enumerate() {
        let marker = if tracker.is_active(&entry.id) { "▸" } else { " " };
        println!(
            "{:3}. {} {} {}  ({})",
            i + 1,
            marker,
            entry.category.style().icon,
            entry.title,
            format_relative(&entry.created_at, &now)
        );
    }
    println!("{}", "=".repeat(60));
}

fn print_palette(palette: &CommandPalette) {
    let visible = palette.visible_items();
    if visible.is_empty() {
        println!("\nNothing matches '{}'. Enter submits it as a new request.", palette.query());
        return;
    }

    let mut position = 0;
    for section in [
        PaletteSection::Suggested,
        PaletteSection::Recent,
        PaletteSection::Actions,
    ] {
        let items = palette.section(section);
        if items.is_empty() {
            continue;
        }

        println!("\n{}", section.heading().to_uppercase());
        for item in items {
            position += 1;
            let selected = if position - 1 == palette.selected_index() { ">" } else { " " };
            println!(
                "{} {:2}. {} {:<32} {}",
                selected,
                position,
                item.icon,
                item.title,
                item.shortcut.as_deref().unwrap_or("")
            );
            if let Some(subtitle) = &item.subtitle {
                println!("        {}", subtitle);
            }
        }
    }
}

fn print_shell_help() {
    println!(
        r#"
Type anything to submit it as a request.

    :recent              Show recent requests
    :open <n>            Reopen recent request n
    :remove <n>          Remove recent request n
    :clear               Clear the history
    :new [page]          Open ask, draft or automate with nothing selected
    :palette [filter]    Show the command palette
    :go <n>              Pick item n from the palette
    :shortcut <1|2>      Use a palette suggestion shortcut
    :quit                Leave
"#
    );
}

fn print_usage() {
    println!(
        r#"lexdesk v{} - Your legal workspace remembers what you asked

USAGE:
    lexdesk [--verbose] [--config <path>] <COMMAND> [ARGS]

COMMANDS:
    classify <text>      Show where a request would be routed
    ask <text>           Submit a request
    recent               Show recent requests
    palette [filter]     Show the command palette
    shell                Start an interactive session
    config               Show the active configuration
    version              Show version
    help                 Show this help

EXAMPLES:
    lexdesk classify draft a consulting agreement
    lexdesk ask run due diligence checklist
    lexdesk palette draft
    lexdesk shell

CONFIGURATION:
    ~/.lexdesk/config.json, or LEXDESK_RECENT_CAPACITY, LEXDESK_TITLE_MAX_CHARS,
    LEXDESK_THINKING_DELAY_MS, LEXDESK_SEED_DEMO
"#,
        env!("CARGO_PKG_VERSION")
    );
}
