//! Play command - interactive game against the minimax opponent

use anyhow::Result;
use clap::{Parser, builder::RangedU64ValueParser};

use crate::{
    adapters::TerminalFrontend,
    session::{PlayConfig, RoundController},
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play tic-tac-toe against the computer")]
pub struct PlayArgs {
    /// Let the computer open the first round
    #[arg(long)]
    pub machine_first: bool,

    /// Stop after this many rounds instead of asking to play again
    #[arg(long, short = 'r', value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub rounds: Option<usize>,
}

impl PlayArgs {
    /// Session configuration described by these arguments
    pub fn config(&self) -> PlayConfig {
        let config = PlayConfig::default().with_human_first(!self.machine_first);
        match self.rounds {
            Some(rounds) => config.with_max_rounds(rounds),
            None => config,
        }
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let mut controller = RoundController::new(TerminalFrontend::stdio(), args.config());
    controller.run()?;
    Ok(())
}
