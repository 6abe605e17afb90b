mod config;
mod error;
mod runtime;
mod similar;
mod sources;
mod tracklist;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
