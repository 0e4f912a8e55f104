use anyhow::{Context, Result};
use busfinder::sdk::{
    autocomplete::{InputEffect, PlaceInput},
    chat::{ChatSequencer, ChatUpdate, DisclosureStep},
    chat::sample::sample_routes,
    config::{AppConfig, MapsConfig},
    details::{BusDetailsView, DETAILS_ZOOM},
    error::BusFinderError,
    model::{LatLng, Place, RouteOption},
    navigation::{FirstScreen, Screen, SessionStore},
    notify::NOTIFICATION_LIFETIME_MS,
    provider::{
        AutocompleteProvider, FixedGeolocator, Geocoder, GooglePlacesProvider, OfflinePlaces, RouteSearch,
        RouteSearchClient, RouteSearchRequest,
    },
    search::{Event, LogMap, ResultsView, SearchShell, Slot},
    util::{log::init_logging, rate_limit::places_limiter},
};
use clap::{Parser, Subcommand};
use std::{
    io::{self, Write},
    thread,
    time::{Duration, Instant},
};

/// Find a bus to where you are going.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the chat flow for a destination
    Chat {
        /// Full destination, e.g. "Palayam, Kozhikode, Kerala"
        destination: String,

        /// Open the chat directly, without the staged animation
        #[arg(long)]
        instant: bool,

        /// Ask the backend for routes instead of the canned list
        #[arg(long)]
        live: bool,

        /// [Optional] Open the details of the Nth inline result (1-based)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Search routes on the map screen
    Search {
        /// Destination text
        #[arg(long)]
        to: String,

        /// [Optional] Origin text; defaults to your location when given
        #[arg(long)]
        from: Option<String>,

        /// [Optional] Device latitude
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// [Optional] Device longitude
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,

        /// [Optional] Select the Nth route (1-based)
        #[arg(long)]
        pick: Option<usize>,

        /// Confirm the selected trip
        #[arg(long, requires = "pick")]
        confirm: bool,
    },
    /// Print address suggestions for a query
    Suggest { query: String },
}

enum Places {
    Google(GooglePlacesProvider),
    Offline(OfflinePlaces),
}

impl Places {
    fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(match &config.maps {
            MapsConfig::Google { api_key } => Places::Google(
                GooglePlacesProvider::new(api_key.clone(), places_limiter(), config.timeout)
                    .context("building Google Maps client")?,
            ),
            MapsConfig::Offline => {
                log::warn!("GOOGLE_MAPS_API_KEY not set, place lookups are disabled");
                Places::Offline(OfflinePlaces)
            }
        })
    }

    fn is_online(&self) -> bool {
        matches!(self, Places::Google(_))
    }

    fn autocomplete(&self) -> &dyn AutocompleteProvider {
        match self {
            Places::Google(p) => p,
            Places::Offline(p) => p,
        }
    }

    fn geocoder(&self) -> &dyn Geocoder {
        match self {
            Places::Google(p) => p,
            Places::Offline(p) => p,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().context("reading configuration")?;
    let places = Places::from_config(&config)?;
    let backend = RouteSearchClient::new(config.backend_url.clone(), config.timeout)
        .context("building backend client")?;
    log::info!("Backend at {}", config.backend_url);

    match cli.command {
        Command::Chat { destination, instant, live, pick } => {
            run_chat(&destination, instant, live, pick, &backend, &places)
        }
        Command::Search { to, from, lat, lng, pick, confirm } => {
            let geolocator = FixedGeolocator {
                position: lat.zip(lng).map(|(lat, lng)| LatLng::new(lat, lng)),
            };
            run_search(
                &to,
                from.as_deref(),
                &geolocator,
                pick,
                confirm,
                &config.country,
                &backend,
                &places,
            )
        }
        Command::Suggest { query } => run_suggest(&query, &config.country, &places),
    }
}

fn run_chat(
    destination: &str,
    instant: bool,
    live: bool,
    pick: Option<usize>,
    backend: &dyn RouteSearch,
    places: &Places,
) -> Result<()> {
    let pick = pick.map(route_index).transpose()?;
    let mut session = SessionStore::default();
    if !instant {
        let mut first = FirstScreen::default();
        first.on_change(destination);
        let Some(transition) = first.on_enter(destination, &mut session) else {
            return Err(BusFinderError::UserInput("destination is empty".to_string()).into());
        };
        thread::sleep(Duration::from_millis(transition.after_ms));
    }

    let results = if live {
        let request = RouteSearchRequest {
            from: String::new(),
            to: destination.to_string(),
            from_place_data: None,
            to_place_data: None,
        };
        backend.search(&request).context("route search failed")?
    } else {
        sample_routes()
    };

    let mut chat = ChatSequencer::enter(&mut session, destination, results);
    let clock = Instant::now();
    let elapsed = || clock.elapsed().as_millis() as u64;

    let mut out = std::io::stdout();
    let opening = chat.start(elapsed());
    print_chat(&mut out, &chat, opening)?;
    while !chat.is_finished() {
        let now = elapsed();
        if let Some(wake) = chat.next_wakeup(now) {
            thread::sleep(Duration::from_millis(wake.saturating_sub(now)));
        }
        let updates = chat.tick(elapsed());
        print_chat(&mut out, &chat, updates)?;
    }
    writeln!(out)?;

    let Some(index) = pick else {
        return Ok(());
    };
    let screen = chat
        .select_result(index)
        .unwrap_or(Screen::BusDetails { route: None, place_full: None });
    let view = BusDetailsView::from_screen(&screen, places.geocoder());
    for line in view.lines() {
        println!("{}", line);
    }
    if let BusDetailsView::Ready { map_center, .. } = view {
        log::info!("[MAP] details at {:?} zoom {}", map_center, DETAILS_ZOOM);
    }
    Ok(())
}

/// Converts a 1-based `--pick` value into a list index.
fn route_index(pick: usize) -> Result<usize, BusFinderError> {
    pick.checked_sub(1)
        .ok_or_else(|| BusFinderError::UserInput("--pick counts from 1".to_string()))
}

fn print_chat<W: Write>(out: &mut W, chat: &ChatSequencer, updates: Vec<ChatUpdate>) -> io::Result<()> {
    for update in updates {
        match update {
            ChatUpdate::Revealed(DisclosureStep::UserMessage) => writeln!(out, "you: {}", chat.user_message())?,
            ChatUpdate::Revealed(DisclosureStep::BotMessage(line)) => {
                write!(out, "\nbot: {}", chat.bot_text(line))?;
            }
            ChatUpdate::Revealed(DisclosureStep::TypingIndicator) => write!(out, "\nbot is typing...")?,
            ChatUpdate::Hidden(DisclosureStep::TypingIndicator) => write!(out, "\r                \r")?,
            ChatUpdate::Revealed(DisclosureStep::ResultList) => {
                writeln!(out)?;
                print_routes(out, chat.visible_results())?;
            }
            ChatUpdate::Revealed(DisclosureStep::MoreResultsPrompt) => {
                writeln!(out, "More buses available - check the full list.")?
            }
            ChatUpdate::Revealed(DisclosureStep::BackAffordance) => writeln!(out, "\n[back]")?,
            ChatUpdate::Typed { text, .. } => write!(out, "\rbot: {}", text)?,
            ChatUpdate::Hidden(_) | ChatUpdate::ScrollToLatest => {}
        }
    }
    out.flush()
}

fn print_routes<W: Write>(out: &mut W, routes: &[RouteOption]) -> io::Result<()> {
    for (i, route) in routes.iter().enumerate() {
        writeln!(
            out,
            "  {}. {} | {} | departs in {} | {}",
            i + 1,
            route.bus_name,
            route.duration,
            route.departure_in,
            route.fare
        )?;
    }
    Ok(())
}

fn run_search(
    to: &str,
    from: Option<&str>,
    geolocator: &FixedGeolocator,
    pick: Option<usize>,
    confirm: bool,
    country: &str,
    backend: &dyn RouteSearch,
    places: &Places,
) -> Result<()> {
    let pick = pick.map(route_index).transpose()?;
    let mut shell = SearchShell::new(LogMap, backend, places.geocoder(), geolocator);
    shell.dispatch(Event::MapReady);
    shell.dispatch(Event::CollapsedFieldFocused);

    match from {
        Some(origin) => {
            shell.dispatch(Event::OriginEdited(origin.to_string()));
            if let Some(place) = resolve_place(origin, country, places) {
                shell.dispatch(Event::PlaceSelected { slot: Slot::Origin, place });
            }
        }
        None if geolocator.position.is_some() => shell.dispatch(Event::UseMyLocation),
        None => {}
    }

    shell.dispatch(Event::DestinationEdited(to.to_string()));
    if let Some(place) = resolve_place(to, country, places) {
        shell.dispatch(Event::PlaceSelected { slot: Slot::Destination, place });
    }

    shell.dispatch(Event::Submit);
    match &shell.state().results {
        ResultsView::Loaded(routes) => print_routes(&mut std::io::stdout(), routes)?,
        other => println!("{:?}", other),
    }

    if let Some(index) = pick {
        shell.dispatch(Event::RouteClicked(index));
        if let Some(route) = shell.state().selected_route() {
            println!("Selected: {}", route.bus_name);
        }
        if confirm {
            shell.dispatch(Event::Confirm);
            shell.advance(NOTIFICATION_LIFETIME_MS);
        }
    }

    for note in shell.notifications_shown() {
        println!("{} {}", note.icon(), note.message);
    }
    Ok(())
}

/// Resolves free text to a place through the first autocomplete suggestion.
fn resolve_place(text: &str, country: &str, places: &Places) -> Option<Place> {
    if !places.is_online() {
        return None;
    }
    let suggestions = match places.autocomplete().predictions(text, country) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("No suggestions for {:?}: {}", text, err);
            return None;
        }
    };
    let first = suggestions.first()?;
    match places.autocomplete().place_details(&first.place_id) {
        Ok(place) => Some(place),
        Err(err) => {
            log::warn!("Could not resolve {:?}: {}", first.description, err);
            None
        }
    }
}

fn run_suggest(query: &str, country: &str, places: &Places) -> Result<()> {
    let mut input = PlaceInput::new("", country, places.is_online());
    for effect in input.input(query) {
        if let InputEffect::Request { .. } = effect {
            input.fulfil(places.autocomplete(), &effect);
        }
    }
    if input.suggestions().is_empty() {
        println!("No suggestions for {:?}", query);
    }
    for (i, suggestion) in input.suggestions().iter().enumerate() {
        println!("{}. {}", i + 1, suggestion.description);
    }
    Ok(())
}
