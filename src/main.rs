use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

use basket_advisor::config::AdvisorProfile;
use basket_advisor::engine::scoring::{all_answered, answered_count, risk_tolerance};
use basket_advisor::error::{AdvisorError, QuestionnaireError};
use basket_advisor::logging;
use basket_advisor::questions::QuestionTemplate;
use basket_advisor::questions::loader::load_template;
use basket_advisor::report::{build_summary, write_reports};
use basket_advisor::session::AdvisorSession;
use basket_advisor::session::script::{SessionScript, replay};
use basket_advisor::session::store::StateStore;

#[derive(Parser)]
#[command(name = "basket-advisor")]
#[command(version)]
#[command(about = "Risk-tolerance questionnaire scoring and bounded basket allocation")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the question template
    Questions {
        #[arg(long)]
        questions: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Score a list of answer indexes, e.g. "1,4,-,2"
    Score {
        #[arg(long)]
        answers: String,
        #[arg(long)]
        questions: Option<PathBuf>,
    },
    /// Replay a session script and write summary.json and report.txt
    Run {
        #[arg(long)]
        session: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        store: Option<PathBuf>,
        #[arg(long)]
        profile: Option<PathBuf>,
        #[arg(long)]
        questions: Option<PathBuf>,
    },
    /// Clear persisted session state
    Reset {
        #[arg(long)]
        store: PathBuf,
        #[arg(long)]
        profile: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AdvisorError> {
    match command {
        Command::Questions { questions, json } => {
            let template = load_template(questions.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(template.questions())?);
            } else {
                print!("{}", render_template(&template));
            }
            Ok(())
        }
        Command::Score { answers, questions } => {
            let template = load_template(questions.as_deref())?;
            let selections = parse_answers(&answers)?;
            let mut qs = template.fresh();
            if selections.len() > qs.len() {
                return Err(QuestionnaireError::QuestionOutOfRange {
                    index: selections.len() - 1,
                    count: qs.len(),
                }
                .into());
            }
            for (idx, sel) in selections.iter().enumerate() {
                if let Some(answer) = sel {
                    qs[idx].select(idx, *answer)?;
                }
            }
            println!("score\t{:.2}", risk_tolerance(&qs));
            println!("answered\t{}/{}", answered_count(&qs), qs.len());
            println!("complete\t{}", all_answered(&qs));
            Ok(())
        }
        Command::Run {
            session,
            out,
            store,
            profile,
            questions,
        } => {
            let profile = load_profile(profile.as_deref())?;
            let template = load_template(questions.as_deref())?;
            let script = SessionScript::load(&session)?;
            let store = store.map(|dir| StateStore::new(&dir, &profile.store_name));

            let mut advisor = match store.as_ref().map(StateStore::load).transpose()? {
                Some(Some(state)) => AdvisorSession::restore(template, profile, state)?,
                _ => AdvisorSession::new(template, profile),
            };

            let outcome = replay(&mut advisor, &script, Instant::now())?;
            let summary = build_summary(&advisor, &outcome.view, outcome.rejected);
            write_reports(&summary, &out)?;

            if let Some(store) = &store {
                store.save(&advisor.snapshot())?;
            }
            println!(
                "risk tolerance {:.2}, {} assets, allocation {}",
                summary.risk_tolerance,
                summary.assets.len(),
                if summary.complete { "complete" } else { "incomplete" }
            );
            Ok(())
        }
        Command::Reset { store, profile } => {
            let profile = load_profile(profile.as_deref())?;
            let store = StateStore::new(&store, &profile.store_name);
            if store.clear()? {
                println!("cleared {}", store.path().display());
            } else {
                println!("nothing to clear at {}", store.path().display());
            }
            Ok(())
        }
    }
}

fn load_profile(path: Option<&Path>) -> Result<AdvisorProfile, AdvisorError> {
    match path {
        Some(p) => AdvisorProfile::load(p),
        None => Ok(AdvisorProfile::default_v1()),
    }
}

/// One field per question in order; `-` leaves a question unanswered.
fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>, AdvisorError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(pos, s)| match s {
            "" => Err(AdvisorError::Config(format!(
                "empty answer field at position {}; use - for unanswered",
                pos + 1
            ))),
            "-" => Ok(None),
            _ => s
                .parse::<usize>()
                .map(Some)
                .map_err(|_| AdvisorError::Config(format!("invalid answer index: {s}"))),
        })
        .collect()
}

fn render_template(template: &QuestionTemplate) -> String {
    let mut out = String::new();
    for (idx, q) in template.questions().iter().enumerate() {
        out.push_str(&format!("{}. {} - {}\n", idx + 1, q.title, q.prompt));
        for (a_idx, a) in q.answers.iter().enumerate() {
            out.push_str(&format!("   [{}] {} ({} pts)\n", a_idx, a.label, a.points));
        }
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
