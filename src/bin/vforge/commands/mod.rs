mod check;
mod enumerate;
mod states;

use check::run_check;
use enumerate::run_enumerate;
use states::run_states;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Check(args) => run_check(args, ctx),
        Command::Enumerate(args) => run_enumerate(args, ctx),
        Command::States(args) => run_states(args, ctx),
    }
}
