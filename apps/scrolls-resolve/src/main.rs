use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = scrolls_resolve::Args::parse();

	scrolls_resolve::run(args).await
}
