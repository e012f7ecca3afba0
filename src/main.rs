use std::io::Read;

use mail_insight::config::{AnalyzerConfig, load_training_set};
use mail_insight::pipeline::EmailAnalyzer;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next();
    let subject = args.next().unwrap_or_default();

    let body = match path.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let mut config = AnalyzerConfig::default();
    if let Ok(training_path) = std::env::var("MAIL_INSIGHT_TRAINING") {
        eprintln!("   Training set: {training_path}");
        config.training = load_training_set(&training_path)?;
    }

    let analyzer = EmailAnalyzer::new(config)?;
    let result = analyzer.analyze(&body, &subject);
    println!("{}", serde_json::to_string_pretty(&*result)?);

    Ok(())
}
