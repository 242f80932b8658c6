use clap::{Parser, Subcommand};
use eyre::Context;
use obd_video_search::format::{
    NO_COMMENTS_MESSAGE, SEARCH_FAILED_MESSAGE, format_published_date, format_view_count,
    watch_url,
};
use obd_video_search::youtube_api::DEFAULT_COMMENT_LIMIT;
use obd_video_search::{
    ApiConfig, Comment, EnrichConcurrency, RequestScope, UpstreamRequestError, VideoSummary,
    YouTubeClient, enrich_with_statistics,
};
use std::io::IsTerminal;
use std::time::Duration;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Look up repair videos for a vehicle diagnostic code.
///
/// The YouTube API key is read from YOUTUBE_API_KEY.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Give up on any single request after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for videos about a diagnostic code, e.g. P0300
    Search {
        code: String,

        /// Skip the per-video view count lookups
        #[arg(long)]
        no_stats: bool,

        /// Maximum concurrent view count lookups ("unbounded" or a number)
        #[arg(long, value_parser = EnrichConcurrency::parse)]
        concurrency: Option<EnrichConcurrency>,
    },
    /// Show the top-level comments on a video
    Comments {
        video_id: String,

        #[arg(long, default_value_t = DEFAULT_COMMENT_LIMIT)]
        limit: u32,

        /// Fail instead of printing nothing when comments cannot be loaded
        #[arg(long)]
        strict: bool,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env().context("load configuration")?;
    if let Some(secs) = args.timeout {
        config.request_timeout = Some(Duration::from_secs(secs));
    }
    if let Command::Search {
        concurrency: Some(concurrency),
        ..
    } = &args.command
    {
        config.enrich_concurrency = *concurrency;
    }
    tracing::debug!(?config, "starting");

    let client = YouTubeClient::new(config).context("construct YouTube client")?;

    // Everything spawned here is aborted if the user hits ^C before it completes.
    let mut scope = RequestScope::new();

    match args.command {
        Command::Search { code, no_stats, .. } => {
            let code = code.trim().to_string();
            if code.is_empty() {
                eyre::bail!("enter a diagnostic code to search for");
            }

            let yt = client.clone();
            let rx = scope.spawn(async move {
                let summaries = yt.search_videos(&code).await?;
                let videos = if no_stats {
                    summaries
                } else {
                    let concurrency = yt.config().enrich_concurrency;
                    enrich_with_statistics(&yt, summaries, concurrency).await
                };
                Ok::<_, UpstreamRequestError>(videos)
            });

            let videos = tokio::select! {
                result = rx => result.context("search task ended unexpectedly")?,
                _ = tokio::signal::ctrl_c() => {
                    scope.cancel();
                    eyre::bail!("interrupted");
                }
            };

            let videos = match videos {
                Ok(videos) => videos,
                Err(e) => {
                    eprintln!("{SEARCH_FAILED_MESSAGE}");
                    return Err(eyre::Report::new(e).wrap_err("search YouTube"));
                }
            };

            if args.json {
                println!("{}", serde_json::to_string_pretty(&videos)?);
            } else if videos.is_empty() {
                println!("No videos found.");
            } else {
                for (i, video) in videos.iter().enumerate() {
                    print_video(i + 1, video);
                }
            }
        }
        Command::Comments {
            video_id,
            limit,
            strict,
        } => {
            let yt = client.clone();
            let rx = scope.spawn(async move {
                if strict {
                    yt.try_fetch_comments(&video_id, limit).await
                } else {
                    Ok(yt.fetch_comments(&video_id, limit).await)
                }
            });

            let comments = tokio::select! {
                result = rx => result.context("comment task ended unexpectedly")?,
                _ = tokio::signal::ctrl_c() => {
                    scope.cancel();
                    eyre::bail!("interrupted");
                }
            }
            .context("fetch comments")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&comments)?);
            } else if comments.is_empty() {
                println!("{NO_COMMENTS_MESSAGE}");
            } else {
                for comment in &comments {
                    print_comment(comment);
                }
            }
        }
    }

    Ok(())
}

fn print_video(position: usize, video: &VideoSummary) {
    println!("{position:>2}. {}", video.title);

    let mut details = vec![
        video.channel_title.clone(),
        format!("Published: {}", format_published_date(&video.published_at)),
    ];
    let views = format_view_count(video.view_count.as_deref());
    if !views.is_empty() {
        details.push(format!("{views} views"));
    }
    println!("    {}", details.join(" · "));
    println!("    {}", watch_url(&video.id));
}

fn print_comment(comment: &Comment) {
    println!(
        "{} · {} · {} likes",
        comment.author_display_name,
        format_published_date(&comment.published_at),
        comment.like_count
    );
    for line in comment.text.lines() {
        println!("    {line}");
    }
    println!();
}
