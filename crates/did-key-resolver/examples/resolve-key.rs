use did_key_resolver::{
    ContentType, DIDKeyClient, ResolutionOptions, config::DIDKeyConfigBuilder,
    errors::DIDKeyError,
};
use clap::Parser;
use tracing_subscriber::filter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// DID to resolve
    #[arg(short, long)]
    did: String,

    /// Document content type (application/did+json or application/did+ld+json)
    #[arg(short, long, default_value = "application/did+json")]
    accept: String,
}

#[tokio::main]
async fn main() -> Result<(), DIDKeyError> {
    // **************************************************************
    // *** Initial setup
    // **************************************************************
    let args = Args::parse();

    // construct a subscriber that prints formatted traces to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter::EnvFilter::from_default_env())
        .finish();
    // use that subscriber to process traces emitted after this point
    tracing::subscriber::set_global_default(subscriber).expect("Logging failed, exiting...");

    println!();
    println!(" ****************************** ");
    println!(" *  did:key Resolve Example   * ");
    println!(" ****************************** ");
    println!();

    let accept: ContentType = args.accept.parse()?;
    let client = DIDKeyClient::new(DIDKeyConfigBuilder::default().build());

    let response = client
        .resolve(&args.did, Some(ResolutionOptions::new(accept)))
        .await?;
    println!(
        "Resolved DID Document:\n{}",
        serde_json::to_string_pretty(&response.did_document).unwrap()
    );

    Ok(())
}
