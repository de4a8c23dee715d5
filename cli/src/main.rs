//! CLI entrypoint for voice-helpdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use helpdesk_application::{
    AnswerGenerator, AnswerQuestionUseCase, HandleInquiryUseCase, InquiryInput,
    KnowledgeResolver, KnowledgeStore, MetricsSink, NoMetrics,
};
use helpdesk_domain::{OutputFormat, validate_records};
use helpdesk_infrastructure::{ConfigLoader, FileConfig, JsonFileKnowledgeStore, JsonlMetricsSink};
use helpdesk_presentation::{
    Cli, ConsoleFormatter, ContactFlowHandler, OutputFormatter, ResponseFormatter,
};
use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    let _guard = init_logging(&cli, &config);
    info!("Starting voice-helpdesk");

    let (config, warnings) = ConfigLoader::check(config)?;
    if !warnings.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&warnings));
    }

    // === Dependency Injection ===
    #[cfg(feature = "aws")]
    let sdk_config = helpdesk_infrastructure::load_sdk_config(&config.aws).await;

    #[cfg(feature = "aws")]
    let store = build_store(&config, &sdk_config);
    #[cfg(not(feature = "aws"))]
    let store = build_store(&config);

    if cli.check_knowledge {
        return check_knowledge(store).await;
    }

    let metrics: Arc<dyn MetricsSink> = match &config.metrics.jsonl_path {
        Some(path) => match JsonlMetricsSink::new(path, config.metrics.environment.clone()) {
            Some(sink) => Arc::new(sink),
            None => Arc::new(NoMetrics),
        },
        None => Arc::new(NoMetrics),
    };

    let mut params = config.to_execution_params();
    if let Some(secs) = cli.timeout {
        params = params.with_call_timeout((secs > 0).then(|| Duration::from_secs(secs)));
    }

    let resolver = KnowledgeResolver::new(store)
        .with_top_k(params.retrieval_top_k)
        .with_metrics(metrics.clone());

    #[cfg(feature = "aws")]
    let (resolver, generator) = attach_providers(resolver, &config, &sdk_config);
    #[cfg(not(feature = "aws"))]
    let (resolver, generator) = attach_providers(resolver, &config);

    let mut answerer = AnswerQuestionUseCase::new(resolver)
        .with_policy(config.escalation.to_policy())
        .with_pricing(config.generation.pricing())
        .with_metrics(metrics.clone());
    if let Some(generator) = generator {
        answerer = answerer.with_generator(generator);
    }

    let use_case = HandleInquiryUseCase::new(answerer)
        .with_params(params)
        .with_metrics(metrics);

    // === Execute ===
    let output = if let Some(path) = &cli.event {
        let handler = ContactFlowHandler::new(use_case);
        match read_event(path, cli.event_from_stdin()) {
            Ok(raw) => handler.process_raw(&raw).await,
            Err(e) => handler.reject(format!("{e:#}")),
        }
    } else {
        let Some(question) = cli.question.clone() else {
            bail!("A question or --event is required. See --help.");
        };
        use_case.execute(InquiryInput::new(question)).await
    };

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let formatter: &dyn OutputFormatter = match format {
        OutputFormat::Json => &ResponseFormatter,
        OutputFormat::Text => &ConsoleFormatter,
    };
    println!("{}", formatter.format(&output));

    Ok(())
}

/// Initialize tracing.
///
/// Filter priority: `-v` flags, then `RUST_LOG`, then `[logging] level`,
/// then `warn`. Logs go to stderr, or to a daily file under `--log-dir`.
fn init_logging(cli: &Cli, config: &FileConfig) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.logging.level.as_deref().unwrap_or("warn"))
        }),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "voice-helpdesk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            None
        }
    }
}

/// Managed retrieval (when a knowledge base id is set) and the generative fallback.
#[cfg(feature = "aws")]
fn attach_providers(
    resolver: KnowledgeResolver,
    config: &FileConfig,
    sdk_config: &aws_config::SdkConfig,
) -> (KnowledgeResolver, Option<Arc<dyn AnswerGenerator>>) {
    use helpdesk_infrastructure::{BedrockAnswerGenerator, BedrockKnowledgeRetriever};

    let resolver = match config.knowledge.knowledge_base_id() {
        Some(kb_id) => {
            info!(knowledge_base_id = kb_id, "Managed retrieval enabled");
            resolver.with_retriever(Arc::new(BedrockKnowledgeRetriever::new(sdk_config, kb_id)))
        }
        None => resolver,
    };
    let generator: Arc<dyn AnswerGenerator> =
        Arc::new(BedrockAnswerGenerator::new(sdk_config, &config.generation));
    (resolver, Some(generator))
}

#[cfg(not(feature = "aws"))]
fn attach_providers(
    resolver: KnowledgeResolver,
    config: &FileConfig,
) -> (KnowledgeResolver, Option<Arc<dyn AnswerGenerator>>) {
    if config.knowledge.knowledge_base_id().is_some() {
        tracing::warn!("knowledge.knowledge_base_id is set but this build has no AWS support");
    }
    (resolver, None)
}

/// Pick the record source: S3 when a bucket is configured, else the local file.
#[cfg(feature = "aws")]
fn build_store(
    config: &FileConfig,
    sdk_config: &aws_config::SdkConfig,
) -> Option<Arc<dyn KnowledgeStore>> {
    use helpdesk_infrastructure::S3KnowledgeStore;

    if let Some(bucket) = config.knowledge.bucket() {
        info!(bucket, key = %config.knowledge.object_key, "Using S3 knowledge store");
        return Some(Arc::new(S3KnowledgeStore::new(
            sdk_config,
            bucket,
            config.knowledge.object_key.clone(),
        )));
    }
    local_store(config)
}

#[cfg(not(feature = "aws"))]
fn build_store(config: &FileConfig) -> Option<Arc<dyn KnowledgeStore>> {
    if config.knowledge.bucket().is_some() {
        tracing::warn!("knowledge.bucket is set but this build has no AWS support");
    }
    local_store(config)
}

fn local_store(config: &FileConfig) -> Option<Arc<dyn KnowledgeStore>> {
    let path = config.knowledge.local_path.as_ref()?;
    info!(path = %path.display(), "Using local knowledge file");
    Some(Arc::new(JsonFileKnowledgeStore::new(path)))
}

async fn check_knowledge(store: Option<Arc<dyn KnowledgeStore>>) -> Result<()> {
    let Some(store) = store else {
        bail!("No knowledge source configured (set knowledge.bucket or knowledge.local_path)");
    };
    let records = store
        .load_records()
        .await
        .context("Failed to load knowledge records")?;
    let report = validate_records(&records);
    println!("{}", ConsoleFormatter::format_knowledge_report(&report));

    if !report.is_valid() {
        bail!("Knowledge validation failed");
    }
    Ok(())
}

/// Read the raw event text; parsing is left to the contact-flow handler.
fn read_event(path: &std::path::Path, from_stdin: bool) -> Result<String> {
    if from_stdin {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read event from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))
    }
}
