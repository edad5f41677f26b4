mod advice;
mod analyzer;
mod benchmarks;
mod club_targets;
mod diagnosis;
mod mock_swing;
mod profile;
mod remote_store;
mod report;
mod session;
mod shot;
mod targets;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use analyzer::{SwingAnalyzer, DEFAULT_TOP_ISSUES};
use mock_swing::MockSwing;
use profile::{PlayerProfile, PlayerType};
use remote_store::RemoteStore;
use session::{filter_by_club, LocalStore, Session, SessionStore};
use shot::{ClubType, ObservedMetrics};

#[derive(Parser, Debug)]
#[command(name = "swing-analyzer")]
#[command(about = "Launch monitor swing analyzer with skill-adjusted targets", long_about = None)]
struct Cli {
    /// Directory for saved sessions and profile (default: ~/.swing-analyzer)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Store sessions in a remote document store at this base URL
    #[arg(long, global = true)]
    remote_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one swing's launch monitor numbers
    Analyze(AnalyzeArgs),

    /// Analyze simulated swings (for testing without a launch monitor)
    Demo {
        /// Club to simulate
        #[arg(short, long, default_value = "driver")]
        club: ClubType,

        /// Number of swings
        #[arg(short = 'n', long, default_value = "3")]
        count: u32,

        /// Seed for repeatable swings
        #[arg(long)]
        seed: Option<u64>,

        /// Issues to show per swing
        #[arg(long, default_value_t = DEFAULT_TOP_ISSUES)]
        top: usize,

        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// List saved sessions, newest first
    History {
        /// Only show sessions for this club
        #[arg(short, long)]
        club: Option<ClubType>,
    },

    /// Delete one saved session
    Delete {
        /// Session id as shown by `history`
        id: i64,
    },

    /// Delete all saved sessions
    Clear {
        /// Confirm deleting the whole history
        #[arg(long)]
        yes: bool,
    },

    /// Show or update the saved player profile
    Profile(ProfileArgs),
}

#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// Handicap index (plus handicaps are negative)
    #[arg(long, allow_hyphen_values = true)]
    handicap: Option<f64>,

    /// professional, teaching, competitive or amateur
    #[arg(long)]
    player_type: Option<PlayerType>,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    age: Option<u32>,

    /// Rounds played per year
    #[arg(long)]
    rounds: Option<u32>,
}

impl ProfileArgs {
    fn is_empty(&self) -> bool {
        self.handicap.is_none()
            && self.player_type.is_none()
            && self.name.is_none()
            && self.age.is_none()
            && self.rounds.is_none()
    }
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Club used (driver, 3wood, 5wood, 3iron-9iron, pw, gw, sw, lw)
    #[arg(short, long)]
    club: ClubType,

    /// Wedge loft in degrees (required for gw, sw and lw)
    #[arg(long)]
    wedge_loft: Option<f64>,

    /// Smash factor (derived from --club-speed/--ball-speed when omitted)
    #[arg(long)]
    smash: Option<f64>,

    /// Launch angle (degrees)
    #[arg(long, allow_hyphen_values = true)]
    launch: f64,

    /// Spin rate (rpm)
    #[arg(long)]
    spin: f64,

    /// Face to path (degrees, positive = open)
    #[arg(long, allow_hyphen_values = true)]
    face_to_path: Option<f64>,

    /// Dynamic loft (degrees)
    #[arg(long, allow_hyphen_values = true)]
    dynamic_loft: Option<f64>,

    /// Attack angle (degrees, negative = hitting down)
    #[arg(long, allow_hyphen_values = true)]
    aoa: Option<f64>,

    /// Club speed (mph)
    #[arg(long)]
    club_speed: Option<f64>,

    /// Ball speed (mph)
    #[arg(long)]
    ball_speed: Option<f64>,

    /// Club path (degrees)
    #[arg(long, allow_hyphen_values = true)]
    path: Option<f64>,

    /// Face angle (degrees)
    #[arg(long, allow_hyphen_values = true)]
    face: Option<f64>,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Issues to show and save
    #[arg(long, default_value_t = DEFAULT_TOP_ISSUES)]
    top: usize,

    /// Save the analysis to session history
    #[arg(long)]
    save: bool,

    /// Notes stored with a saved session
    #[arg(long, default_value = "")]
    notes: String,

    /// Print the full analysis as JSON
    #[arg(long)]
    json: bool,
}

fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        bail!("{} must be a number, got {}", field, value);
    }
    Ok(value)
}

fn ensure_finite_opt(field: &str, value: Option<f64>) -> Result<Option<f64>> {
    value.map(|v| ensure_finite(field, v)).transpose()
}

/// Validate command line metrics and build the observed record.
fn observed_from_args(args: &AnalyzeArgs) -> Result<ObservedMetrics> {
    let club_speed = ensure_finite_opt("club speed", args.club_speed)?;
    let ball_speed = ensure_finite_opt("ball speed", args.ball_speed)?;

    let smash = match args.smash {
        Some(smash) => ensure_finite("smash factor", smash)?,
        None => ObservedMetrics::smash_from_speeds(club_speed, ball_speed).context(
            "Smash factor is required (pass --smash, or --club-speed and --ball-speed)",
        )?,
    };

    let launch_angle = ensure_finite("launch angle", args.launch)?;
    let spin_rate = ensure_finite("spin rate", args.spin)?;
    let data = ObservedMetrics {
        face_to_path: ensure_finite_opt("face to path", args.face_to_path)?,
        dynamic_loft: ensure_finite_opt("dynamic loft", args.dynamic_loft)?,
        aoa: ensure_finite_opt("attack angle", args.aoa)?,
        club_speed,
        ball_speed,
        path: ensure_finite_opt("path", args.path)?,
        face: ensure_finite_opt("face", args.face)?,
        ..ObservedMetrics::new(smash, launch_angle, spin_rate)
    };

    Ok(data.with_derived_face_to_path())
}

/// Apply profile fields from the command line on top of the saved profile.
///
/// Returns `None` when neither exists.
fn merge_profile(args: &ProfileArgs, saved: Option<PlayerProfile>) -> Result<Option<PlayerProfile>> {
    if args.is_empty() {
        return Ok(saved);
    }

    let player_type = args
        .player_type
        .or(saved.as_ref().map(|p| p.player_type))
        .unwrap_or_default();

    // A handicap saved for a pro may be the placeholder 0, so it only carries
    // over while the player is still classified as a pro.
    let saved_handicap = saved
        .as_ref()
        .filter(|p| !p.player_type.is_professional() || player_type.is_professional())
        .map(|p| p.handicap);

    let handicap = match args.handicap.or(saved_handicap) {
        Some(handicap) => ensure_finite("handicap", handicap)?,
        // Pros are classified by player type alone
        None if player_type.is_professional() => 0.0,
        None => bail!("Please enter your handicap index (--handicap) to get a personalized analysis"),
    };

    let base = saved.unwrap_or_else(|| PlayerProfile::new(handicap, player_type));
    Ok(Some(PlayerProfile {
        name: args.name.clone().or(base.name),
        age: args.age.or(base.age),
        handicap,
        rounds: args.rounds.or(base.rounds),
        player_type,
    }))
}

fn load_saved_profile(store: &mut dyn SessionStore) -> Option<PlayerProfile> {
    match store.load_profile() {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("[STORE] Could not load saved profile: {}", e);
            None
        }
    }
}

/// Profile for an analysis: command line over saved, and remember the result.
fn resolve_profile(args: &ProfileArgs, store: &mut dyn SessionStore) -> Result<Option<PlayerProfile>> {
    let saved = load_saved_profile(store);
    let profile = merge_profile(args, saved)?;
    if let (Some(profile), false) = (&profile, args.is_empty()) {
        if let Err(e) = store.save_profile(profile) {
            log::warn!("[STORE] Could not save profile: {}", e);
        }
    }
    Ok(profile)
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".swing-analyzer")
}

fn open_store(cli: &Cli) -> Result<Box<dyn SessionStore>> {
    if let Some(ref url) = cli.remote_url {
        let store = RemoteStore::new(url.clone()).context("Failed to set up remote session store")?;
        return Ok(Box::new(store));
    }
    let dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    log::debug!("[STORE] Using local data directory {}", dir.display());
    Ok(Box::new(LocalStore::new(dir)))
}

fn run_analyze(args: &AnalyzeArgs, store: &mut dyn SessionStore) -> Result<()> {
    if args.club.is_wedge() && args.wedge_loft.is_none() {
        bail!("Please enter the loft of your wedge (--wedge-loft)");
    }
    let wedge_loft = ensure_finite_opt("wedge loft", args.wedge_loft)?;
    let data = observed_from_args(args)?;
    let profile = resolve_profile(&args.profile, store)?
        .context("No saved profile - pass --handicap (and --player-type) for a personalized analysis")?;

    let analysis = SwingAnalyzer::new().analyze(args.club, wedge_loft, &profile, &data);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        report::print_analysis(&analysis, args.top);
    }

    if args.save {
        let session = Session::from_analysis(&analysis, args.top, &args.notes);
        store.save_session(&session).context("Failed to save session")?;
        println!("Session saved (id {}).", session.id);
    }

    Ok(())
}

fn run_demo(
    club: ClubType,
    count: u32,
    seed: Option<u64>,
    top: usize,
    profile_args: &ProfileArgs,
    store: &mut dyn SessionStore,
) -> Result<()> {
    let profile = resolve_profile(profile_args, store)?.unwrap_or_else(|| {
        log::info!("No saved profile, simulating a 15 handicap amateur");
        PlayerProfile::new(15.0, PlayerType::Amateur)
    });

    let mut mock = match seed {
        Some(seed) => MockSwing::seeded(seed),
        None => MockSwing::new(),
    };
    let analyzer = SwingAnalyzer::new();
    let wedge_loft = club.is_wedge().then_some(match club {
        ClubType::Gw => 52.0,
        ClubType::Sw => 56.0,
        _ => 60.0,
    });

    println!("Mock mode: simulating {} swing(s) with the {}", count, club.name());
    for swing in 1..=count {
        let data = mock.swing(club);
        println!();
        println!(
            "[MOCK] Swing #{}: smash {:.2}, launch {:.1}°, spin {:.0} rpm",
            swing, data.smash, data.launch_angle, data.spin_rate
        );
        let analysis = analyzer.analyze(club, wedge_loft, &profile, &data);
        report::print_analysis(&analysis, top);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut store = open_store(&cli)?;

    match &cli.command {
        Command::Analyze(args) => run_analyze(args, store.as_mut())?,
        Command::Demo {
            club,
            count,
            seed,
            top,
            profile,
        } => run_demo(*club, *count, *seed, *top, profile, store.as_mut())?,
        Command::History { club } => {
            let sessions = store.load_sessions().context("Failed to load session history")?;
            let sessions = filter_by_club(sessions, *club);
            if sessions.is_empty() && club.is_some() {
                println!("No sessions found for this club.");
            } else {
                report::print_history(&sessions);
            }
        }
        Command::Delete { id } => {
            if store.delete_session(*id).context("Failed to delete session")? {
                println!("Deleted session {}.", id);
            } else {
                println!("No session with id {}.", id);
            }
        }
        Command::Clear { yes } => {
            if !*yes {
                println!("This deletes ALL session history and cannot be undone. Re-run with --yes to confirm.");
                return Ok(());
            }
            store.clear().context("Failed to clear session history")?;
            println!("Session history cleared.");
        }
        Command::Profile(args) => match resolve_profile(args, store.as_mut())? {
            Some(profile) => report::print_profile(&profile),
            None => println!("No profile saved yet. Pass --handicap and --player-type to create one."),
        },
    }

    Ok(())
}
