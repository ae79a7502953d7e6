use std::io;

use charmap::{Repl, ReplError, seed::seed};
use collections::CharStringMap;
use log::trace;

fn main() -> Result<(), ReplError> {
    env_logger::builder().init();

    let mut map = CharStringMap::new();
    seed(&mut map);
    trace!("seeded map: {:#?}", map);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Repl::new(stdin.lock(), stdout.lock(), map).run()
}
