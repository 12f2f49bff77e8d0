mod commands;
mod terminal;

use commands::{CommandLine, discover};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let outcome = commands.into_config().and_then(discover::discover);
    discover::report(outcome)
}
