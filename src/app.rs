use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    classifier::MisuseClassifier,
    config::AppConfig,
    db::{self, history::DraftHistoryRepository},
    domain::{DraftResult, Language},
    drafter::RequestDrafter,
    infrastructure::directories::ResolvedPaths,
};

/// The reference caller: an interactive terminal chat session that feeds
/// citizen queries through the misuse gate and the drafter, prints the
/// resulting letters, and keeps a local history with a daily quota.
pub struct RtiMitraApp {
    paths: ResolvedPaths,
    classifier: MisuseClassifier,
    drafter: RequestDrafter,
    history: DraftHistoryRepository,
    config: Arc<AppConfig>,
    timezone: Tz,
    language: Language,
}

enum SessionOutcome {
    Continue,
    Quit,
}

impl RtiMitraApp {
    pub async fn initialize(config: AppConfig, paths: ResolvedPaths) -> Result<Self> {
        let config = Arc::new(config);
        let pool = db::init_pool(&paths.db_path).await?;
        let history = DraftHistoryRepository::new(pool);

        let timezone: Tz = config.timezone.parse().unwrap_or(chrono_tz::Asia::Kolkata);
        let drafter = RequestDrafter::new(config.draft_delay, timezone);
        let language = config.default_language;

        Ok(Self {
            paths,
            classifier: MisuseClassifier::new(),
            drafter,
            history,
            config,
            timezone,
            language,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        tracing::info!(language = %self.language, "RTI Mitra session started");
        println!("RTI Mitra - Right to Information request assistant");
        println!("Describe the information you need. Commands: /lang <en|hi|te>, /suggestions, /history, /quit");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = tokio::select! {
                line = lines.next_line() => line?,
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("interrupt received, ending session");
                    break;
                }
            };
            let Some(line) = line else { break };

            match self.handle_line(line.trim()).await {
                SessionOutcome::Continue => {}
                SessionOutcome::Quit => break,
            }
        }

        self.history.close().await;
        tracing::info!("RTI Mitra session ended");
        Ok(())
    }

    async fn handle_line(&mut self, line: &str) -> SessionOutcome {
        if line.is_empty() {
            return SessionOutcome::Continue;
        }

        if let Some(command) = line.strip_prefix('/') {
            return self.handle_command(command).await;
        }

        self.handle_query(line).await;
        SessionOutcome::Continue
    }

    async fn handle_command(&mut self, command: &str) -> SessionOutcome {
        let mut parts = command.split_whitespace();
        match parts.next() {
            Some("quit") | Some("exit") => return SessionOutcome::Quit,
            Some("lang") => match parts.next() {
                Some(tag) => {
                    self.language = Language::from_tag(tag);
                    println!("Language set to {}", self.language);
                }
                None => println!("Usage: /lang <en|hi|te>"),
            },
            Some("suggestions") => {
                println!("Tips for a well-formed RTI request:");
                for (idx, hint) in self.classifier.suggestions(self.language).iter().enumerate() {
                    println!("  {}. {}", idx + 1, hint);
                }
            }
            Some("history") => self.print_history().await,
            _ => println!("Unknown command. Available: /lang, /suggestions, /history, /quit"),
        }
        SessionOutcome::Continue
    }

    async fn handle_query(&mut self, query: &str) {
        match self.drafts_today().await {
            Ok(count) if count >= i64::from(self.config.daily_draft_limit) => {
                println!(
                    "Daily limit of {} drafts reached. Please come back tomorrow.",
                    self.config.daily_draft_limit
                );
                return;
            }
            Ok(_) => {}
            Err(err) => {
                // Quota check is best-effort; a broken history store should
                // not keep a citizen from drafting.
                tracing::warn!(target: "db", error = %err, "failed to check daily quota");
            }
        }

        if self.classifier.classify(query, self.language).await {
            tracing::info!(target: "classifier", language = %self.language, "query rejected as misuse");
            println!("This looks like a grievance or a request for action rather than a request for recorded information.");
            println!("The RTI process covers existing records only. Try rephrasing:");
            for (idx, hint) in self.classifier.suggestions(self.language).iter().enumerate() {
                println!("  {}. {}", idx + 1, hint);
            }
            return;
        }

        let draft = self.drafter.draft(query, self.language).await;

        println!();
        println!("Department: {}", draft.department);
        println!("Subject:    {}", draft.subject);
        println!();
        println!("{}", draft.content);
        println!();

        match self.history.record(&draft, self.language).await {
            Ok(id) => match self.export_draft(id, &draft).await {
                Ok(path) => println!("Saved as {}", path.display()),
                Err(err) => {
                    tracing::warn!(target: "export", error = %err, "failed to save draft files");
                    println!("Could not save the draft to disk; you can copy it from above and try again.");
                }
            },
            Err(err) => {
                tracing::warn!(target: "db", error = %err, "failed to record draft");
                println!("Could not store this draft in the history; it is still usable above.");
            }
        }
    }

    /// Writes the letter text plus a JSON sidecar with the full artifact, for
    /// downstream renderers (PDF, read-aloud) that consume structured input.
    async fn export_draft(&self, id: i64, draft: &DraftResult) -> Result<PathBuf> {
        let txt_path = self.paths.data_dir.join(format!("rti-draft-{id}.txt"));
        tokio::fs::write(&txt_path, &draft.content).await?;

        let json_path = self.paths.data_dir.join(format!("rti-draft-{id}.json"));
        tokio::fs::write(&json_path, serde_json::to_vec_pretty(draft)?).await?;
        Ok(txt_path)
    }

    async fn print_history(&self) {
        match self.history.recent(10).await {
            Ok(rows) if rows.is_empty() => println!("No drafts yet."),
            Ok(rows) => {
                println!("Recent drafts:");
                for row in rows {
                    println!(
                        "  #{} [{}] {} -> {}",
                        row.id,
                        row.created_at.with_timezone(&self.timezone).format("%d/%m/%Y %H:%M"),
                        row.subject,
                        row.department
                    );
                }
            }
            Err(err) => {
                tracing::warn!(target: "db", error = %err, "failed to load history");
                println!("Could not load the draft history; please try again.");
            }
        }
    }

    /// Drafts recorded since local midnight in the configured timezone.
    async fn drafts_today(&self) -> Result<i64> {
        let now = Utc::now().with_timezone(&self.timezone);
        let midnight = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| naive.and_local_timezone(self.timezone).earliest())
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);
        self.history.count_since(midnight).await
    }
}
