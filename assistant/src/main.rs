use dotenvy::dotenv;
use haven_assistant::{
    tel_link, AdvisoryClient, App, Clipboard, ContactStore, EnvLocationSource, SafePlaceFinder,
    Screen, ShareDispatcher, ShareOutcome,
};
use haven_genai::{GeminiModel, GeminiModelOptions, GenerationError, GenerativeModel};
use std::{
    env,
    error::Error,
    io::{self, Write},
    sync::Arc,
};
use tracing_subscriber::EnvFilter;

const MODEL_ID: &str = "gemini-2.5-flash";

const SUGGESTIONS: [&str; 4] = ["Walking home", "Taking a taxi", "Concert venue", "Parking garage"];

/// Terminal stand-in for the platform clipboard: the message is printed
/// for the user to copy.
struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&self, text: &str) {
        println!("Copied for you to send:\n  {text}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key =
        env::var("GEMINI_API_KEY").map_err(|_| GenerationError::MissingApiKey("GEMINI_API_KEY"))?;

    let model: Arc<dyn GenerativeModel> = Arc::new(GeminiModel::new(
        MODEL_ID,
        GeminiModelOptions {
            api_key,
            ..Default::default()
        },
    ));

    let advisory = AdvisoryClient::new(model.clone());
    let finder = SafePlaceFinder::new(model);
    let dispatcher = ShareDispatcher::new(None, Box::new(TerminalClipboard));

    let mut app = App::new(ContactStore::open_default());
    // Quiet attempt at startup; without a fix the user can still enter an
    // address manually.
    app.location.refresh(&EnvLocationSource);

    println!("Haven, your personal safety assistant");
    println!("Describe your location or situation for calm, practical safety advice.");
    println!(
        "Commands: /share  /safe  /contacts  /add <name> <phone>  /rm <id>  \
         /location <address>  /back  exit"
    );

    loop {
        render(&app);
        let line = read_line("> ")?;
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        handle(&mut app, &advisory, &finder, &dispatcher, &line).await;
        if let Some(notice) = app.take_notice() {
            println!("! {notice}");
        }
    }

    Ok(())
}

async fn handle(
    app: &mut App,
    advisory: &AdvisoryClient,
    finder: &SafePlaceFinder,
    dispatcher: &ShareDispatcher,
    line: &str,
) {
    match line.split_whitespace().next() {
        Some("/share") => app.toggle_share_panel(),
        Some("/safe") => {
            // Re-request a fix when none is known; a manual address may
            // still be required.
            if app.location.query().is_none() {
                app.location.refresh(&EnvLocationSource);
            }
            if let Some(query) = app.open_safe_places() {
                render(app);
                let places = finder.find_safe_places(&query).await;
                app.places_ready(places);
            }
        }
        Some("/send") => {
            if app.location.query().is_none() {
                app.location.refresh(&EnvLocationSource);
            }
            if let Some(outcome) = app.share_location(dispatcher) {
                match outcome {
                    ShareOutcome::Shared => println!("Sent."),
                    ShareOutcome::Copied => println!("Sent/Copied."),
                    ShareOutcome::Dismissed => println!("Share dismissed."),
                }
            }
        }
        Some("/sms") => {
            let index = line
                .split_whitespace()
                .nth(1)
                .and_then(|raw| raw.parse::<usize>().ok());
            sms_to_contact(app, index);
        }
        Some("/contacts") => list_contacts(app),
        Some("/add") => add_contact(app, line),
        Some("/rm") => {
            if let Some(id) = line.split_whitespace().nth(1) {
                match app.contacts.remove(id) {
                    Ok(true) => println!("Removed."),
                    Ok(false) => println!("No contact with id {id}."),
                    Err(error) => println!("! {error}"),
                }
            } else {
                println!("Usage: /rm <id> (see /contacts)");
            }
        }
        Some("/location") => {
            let address = line.trim_start_matches("/location").trim();
            if address.is_empty() {
                app.edit_location();
            } else {
                app.location.set_manual_address(address);
                println!("Location set to \"{address}\".");
            }
        }
        Some("/change") => app.edit_location(),
        Some("/back") => match app.screen() {
            Screen::ShowingAdvice => app.back(),
            _ => app.close_panel(),
        },
        _ => free_text(app, advisory, finder, line).await,
    }
}

/// Plain, non-command input: a scenario on the idle screen, an address
/// while editing the location. Ignored elsewhere.
async fn free_text(app: &mut App, advisory: &AdvisoryClient, finder: &SafePlaceFinder, line: &str) {
    match app.screen() {
        Screen::Idle => {
            if app.submit_scenario(line) {
                render(app);
                let scenario = app.scenario().to_string();
                match advisory.get_safety_advice(&scenario).await {
                    Ok(advice) => app.advice_ready(advice),
                    Err(error) => {
                        tracing::warn!(%error, "advice fetch failed");
                        app.advice_failed();
                    }
                }
            }
        }
        Screen::EditingLocation => {
            if let Some(query) = app.submit_manual_address(line) {
                render(app);
                let places = finder.find_safe_places(&query).await;
                app.places_ready(places);
            }
        }
        _ => {}
    }
}

fn sms_to_contact(app: &mut App, index: Option<usize>) {
    let Some(index) = index else {
        println!("Usage: /sms <number> (see /contacts)");
        return;
    };
    let Some(contact) = app
        .contacts
        .contacts()
        .get(index.wrapping_sub(1))
        .cloned()
    else {
        println!("No contact #{index}.");
        return;
    };
    match app.sms_share(&contact.phone) {
        Some(link) => println!("Open to text {}: {link}", contact.name),
        None => println!("No location yet; enter your address first."),
    }
}

fn add_contact(app: &mut App, line: &str) {
    let tokens: Vec<&str> = line.split_whitespace().skip(1).collect();
    if tokens.len() < 2 {
        println!("Usage: /add <name> <phone>");
        return;
    }
    let (name_tokens, phone) = tokens.split_at(tokens.len() - 1);
    let name = name_tokens.join(" ");
    match app.contacts.add(&name, phone[0]) {
        Ok(()) => println!("Added {name}."),
        Err(error) => println!("! {error}"),
    }
}

fn list_contacts(app: &App) {
    if app.contacts.contacts().is_empty() {
        println!("No emergency contacts yet. Add one with /add <name> <phone>.");
        return;
    }
    for (index, contact) in app.contacts.contacts().iter().enumerate() {
        println!(
            "  {}. {} ({})  [id {}]",
            index + 1,
            contact.name,
            contact.phone,
            contact.id
        );
    }
}

fn render(app: &App) {
    match app.screen() {
        Screen::Idle => {
            println!();
            println!("Where are you right now? (e.g. {})", SUGGESTIONS.join(", "));
        }
        Screen::LoadingAdvice => {
            println!("Thinking... formulating the best safety advice for you.");
        }
        Screen::ShowingAdvice => {
            if let Some(advice) = app.advice() {
                println!();
                println!("Staying safe: {}", app.scenario());
                section("Tips", &advice.tips);
                section("Avoid", &advice.avoid);
                section("Steps", &advice.steps);
                section("If things go wrong", &advice.emergency_guide);
                section("Reminders", &advice.reminders);
                println!("(/back to start over)");
            }
        }
        Screen::SharePanel => {
            println!();
            println!("Send location to...  (/send for other apps, /sms <n> for a contact, /back to close)");
            list_contacts(app);
            if app.share_feedback_active() {
                println!("  Sent/Copied ✓");
            }
        }
        Screen::SafePlaces { loading: true } => {
            println!("Finding safe places nearby...");
        }
        Screen::SafePlaces { loading: false } => {
            println!();
            println!("Nearby safe havens  (/change to change location, /back to close)");
            near_line(app);
            if app.safe_places().is_empty() {
                println!(
                    "  No specific safe places found nearby. \
                     Try /change to enter your address manually."
                );
            } else {
                for place in app.safe_places() {
                    match &place.phone_number {
                        Some(phone) => {
                            println!("  - {}  ({})  {}", place.title, tel_link(phone), place.uri);
                        }
                        None => println!("  - {}  {}", place.title, place.uri),
                    }
                }
            }
        }
        Screen::EditingLocation => {
            println!("Enter your correct location (e.g. 123 Main St, Central Park):");
        }
    }
}

fn near_line(app: &App) {
    if let Some(address) = app.location.manual_address() {
        println!("  Near: {address}");
    } else if app.location.coordinates().is_some() {
        println!("  Near: detected GPS location");
    } else {
        println!("  Near: unknown location");
    }
}

fn section(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("{title}:");
    for item in items {
        println!("  - {item}");
    }
}

fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
