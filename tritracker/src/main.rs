use clap::crate_version;
use questionnaire::{Questionnaire, Session, SessionError};
use questionnaire_dialoguer::DialoguerPresenter;
use questionnaire_ratatui::RatatuiPresenter;

use crate::{
    args::{Args, Frontend},
    submit::JsonSubmitter,
};

mod args;
mod config;
mod fitness;
mod submit;
mod telemetry;

fn main() -> anyhow::Result<()> {
    let args = self::args::parse();
    telemetry::init(&args)?;

    let crate_version = crate_version!();
    tracing::info!("TriTracker {crate_version}");

    let questionnaire = load_questionnaire(&args)?;
    let mut submitter = JsonSubmitter::new(args.output.clone());
    let session = Session::new(questionnaire);

    let outcome = match args.frontend {
        Frontend::Tui => session.run(RatatuiPresenter::new().with_title("TriTracker"), &mut submitter),
        Frontend::Prompt => session.run(DialoguerPresenter::new(), &mut submitter),
    };

    match outcome {
        Ok(answers) => {
            tracing::info!(answers = answers.len(), "questionnaire completed");
            if submitter.path().is_none() {
                if let Some(json) = submitter.rendered() {
                    println!("{json}");
                }
            }
            Ok(())
        }
        Err(SessionError::Abandoned) => {
            eprintln!("{}", SessionError::Abandoned);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn load_questionnaire(args: &Args) -> anyhow::Result<Questionnaire> {
    match args.questions_path() {
        Some(path) => config::load(path),
        None => Ok(fitness::questionnaire()?),
    }
}
