// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! `unicorn` - unification education content from the command line.

mod console;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use unicorn_client::{ClientConfig, QuizOptions, TeacherGate, UnicornClient, DEFAULT_PROXY_URL};

use crate::console::TeacherContext;

#[derive(Parser, Debug)]
#[command(name = "unicorn", version, about, long_about = None)]
struct Args {
	/// Unicorn proxy URL
	#[arg(long, env = "UNICORN_PROXY_URL", default_value = DEFAULT_PROXY_URL)]
	proxy_url: String,

	/// Log level, used when RUST_LOG is unset
	#[arg(short, long, default_value = "warn")]
	log_level: String,

	#[command(subcommand)]
	command: Command,
}

#[derive(clap::Args, Debug)]
struct TeacherArgs {
	/// Teacher console passphrase
	#[arg(long, env = "UNICORN_TEACHER_PASSPHRASE_ATTEMPT", hide_env_values = true)]
	passphrase: String,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Search reading material (teacher)
	Search {
		query: String,
		#[command(flatten)]
		teacher: TeacherArgs,
	},

	/// Search videos (teacher)
	Videos {
		query: String,
		#[arg(long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=50))]
		max_results: u32,
		#[command(flatten)]
		teacher: TeacherArgs,
	},

	/// Generate a quiz from reading material (teacher)
	Quiz {
		/// File holding the reading material
		#[arg(long)]
		file: PathBuf,
		#[arg(long, default_value_t = 3)]
		questions: u8,
		/// School grade, 3 to 6
		#[arg(long, default_value_t = 3)]
		grade: u8,
		#[command(flatten)]
		teacher: TeacherArgs,
	},

	/// Show one video
	Video { video_id: String },

	/// Get feedback on a thank-you letter
	Letter {
		/// Letter text
		text: String,
	},

	/// Show version information
	Version,
}

fn init_tracing(level: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().compact().with_writer(std::io::stderr))
		.init();
}

fn emit<T: serde::Serialize>(result: &unicorn_content_core::AdapterResult<T>) -> Result<ExitCode> {
	let (json, success) = console::render(result).context("failed to render result")?;
	println!("{json}");
	Ok(if success {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
	dotenvy::dotenv().ok();
	let args = Args::parse();

	if let Command::Version = args.command {
		println!(
			"unicorn version: {}\nPlatform:        {}-{}",
			env!("CARGO_PKG_VERSION"),
			std::env::consts::OS,
			std::env::consts::ARCH,
		);
		return Ok(ExitCode::SUCCESS);
	}

	init_tracing(&args.log_level);

	let config = ClientConfig::from_env()
		.context("failed to load client configuration")?
		.with_proxy_url(args.proxy_url);
	let client = UnicornClient::from_config(&config).context("failed to create HTTP client")?;
	let gate = TeacherGate::from_config(&config);

	tracing::debug!(proxy_url = %client.base_url(), "starting unicorn");

	match args.command {
		Command::Search { query, teacher } => {
			let ctx = TeacherContext::unlock(&client, &gate, &teacher.passphrase)?;
			emit(&ctx.search(&query).await)
		}
		Command::Videos {
			query,
			max_results,
			teacher,
		} => {
			let ctx = TeacherContext::unlock(&client, &gate, &teacher.passphrase)?;
			emit(&ctx.videos(&query, max_results).await)
		}
		Command::Quiz {
			file,
			questions,
			grade,
			teacher,
		} => {
			let ctx = TeacherContext::unlock(&client, &gate, &teacher.passphrase)?;
			let content = std::fs::read_to_string(&file)
				.with_context(|| format!("failed to read {}", file.display()))?;
			emit(&ctx.quiz(&content, QuizOptions::new(questions, grade)).await)
		}
		Command::Video { video_id } => emit(&console::video(&client, &video_id).await),
		Command::Letter { text } => emit(&console::letter(&client, &text).await),
		Command::Version => Ok(ExitCode::SUCCESS),
	}
}
