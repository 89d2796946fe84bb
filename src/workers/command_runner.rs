use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use chrono::Local;
use futures::StreamExt;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::REQUERY_FALLBACK_MESSAGE;
use crate::enums::commands::Commands;
use crate::enums::dimension::Dimension;
use crate::errors::{PanelError, PanelResult};
use crate::helpers::last_query::LastQueryStore;
use crate::helpers::table::TablePrinter;
use crate::services::aggregator::Aggregator;
use crate::services::classifier::Classifier;
use crate::services::csv_exporter::CsvExporter;
use crate::services::record_filter::RecordFilter;
use crate::services::requery_client::RequeryClient;
use crate::services::search_client::SearchClient;
use crate::structs::chart_item::ChartRow;
use crate::structs::chat_event::ChatEvent;
use crate::structs::config::config::Config;
use crate::structs::search_session::SearchSession;

pub struct CommandRunner {
    start_time: Option<Instant>,
    session: Option<SearchSession>,
}

impl CommandRunner {

    pub fn new() -> Self {
        Self {
            start_time: None,
            session: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> PanelResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Search { query, limit } => self.search_command(query, limit).await,
            Commands::Distribution { query, dimension } => {
                self.distribution_command(query, dimension).await
            }
            Commands::Drill { query, dimension, label, export } => {
                self.drill_command(query, dimension, label, export).await
            }
            Commands::Visualize { query } => self.visualize_command(query).await,
            Commands::Chat { query } => self.chat_command(query).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("Command finished in {:.2}s", start.elapsed().as_secs_f64());
        }
        result
    }

    fn init_command(&self) -> PanelResult<()> {
        ConfigManager::create_sample_config()
    }

    async fn search_command(&mut self, query: Option<String>, limit: usize) -> PanelResult<()> {
        let config = ConfigManager::load()?;
        let query = Self::resolve_query(query)?;
        let session = self.run_search(&config, &query, Some(limit)).await?;

        println!("\n🔍 \"{}\" → {} respondents (session {})", session.query, session.respondents.len(), session.session_id);
        TablePrinter::print_respondents(&session.respondents, limit);
        Ok(())
    }

    async fn distribution_command(&mut self, query: String, dimension: Dimension) -> PanelResult<()> {
        let config = ConfigManager::load()?;
        let session = self.run_search(&config, &query, None).await?;

        let distribution = Aggregator::aggregate_dimension(&session.respondents, dimension);
        let title = format!(
            "{} distribution ({} respondents)",
            dimension.field_name(),
            session.respondents.len()
        );
        TablePrinter::print_distribution(&title, &distribution);
        Ok(())
    }

    async fn drill_command(
        &mut self,
        query: String,
        dimension: Dimension,
        label: String,
        export: Option<Option<PathBuf>>,
    ) -> PanelResult<()> {
        let config = ConfigManager::load()?;
        let session = self.run_search(&config, &query, None).await?;

        let matched = RecordFilter::filter_by_label(&session.respondents, dimension, &label);
        println!(
            "\n🔎 {} = \"{}\" → {} of {} respondents",
            dimension.field_name(),
            label,
            matched.len(),
            session.respondents.len()
        );
        let owned: Vec<_> = matched.iter().map(|r| (*r).clone()).collect();
        TablePrinter::print_respondents(&owned, 20);

        if let Some(target) = export {
            let path = Self::resolve_export_path(&config, dimension, target)?;
            CsvExporter::export_to_file(&matched, &path)?;
            println!("✅ Exported {} rows to {}", matched.len(), path.display());
        }
        Ok(())
    }

    async fn visualize_command(&mut self, query: String) -> PanelResult<()> {
        let config = ConfigManager::load()?;
        let session = self.run_search(&config, &query, None).await?;

        let client = SearchClient::new(&config.api)?;
        let statistics = client.fetch_statistics(&session.session_id).await?;
        let groups = Classifier::classify(&statistics);

        if groups.is_empty() {
            println!("\n(no statistics available for this session)");
            return Ok(());
        }

        for (category, rows) in &groups {
            println!("\n━━ {} ({}) ━━", category.label(), category);
            for row in rows {
                Self::print_chart_row(row);
            }
        }
        Ok(())
    }

    async fn chat_command(&mut self, query: Option<String>) -> PanelResult<()> {
        let config = ConfigManager::load()?;
        let query = Self::resolve_query(query)?;
        let session = self.run_search(&config, &query, None).await?;
        println!("\n🔍 {} respondents. Refine with natural language, empty line to quit.", session.respondents.len());

        let requery = RequeryClient::new(&config.api)?;

        loop {
            print!("\nyou> ");
            io::stdout().flush()?;
            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let message = line.trim();
            if message.is_empty() || message == "quit" || message == "exit" {
                break;
            }

            let session_id = self
                .session
                .as_ref()
                .map(|s| s.session_id.clone())
                .unwrap_or_default();

            match requery.stream_requery(&session_id, message).await {
                Ok(mut stream) => {
                    print!("panel> ");
                    io::stdout().flush()?;
                    while let Some(event) = stream.next().await {
                        match event {
                            Ok(ChatEvent::Delta(text)) => {
                                print!("{}", text);
                                io::stdout().flush()?;
                            }
                            Ok(ChatEvent::Result(respondents)) => {
                                println!("\n\n🔁 Refined to {} respondents:", respondents.len());
                                TablePrinter::print_respondents(&respondents, 10);
                                if let Some(session) = self.session.as_mut() {
                                    session.replace_respondents(respondents);
                                }
                            }
                            Ok(ChatEvent::Done) => break,
                            Err(error) => {
                                log::warn!("Re-query stream error: {}", error.technical_details());
                                println!("\npanel> {}", Self::chat_fallback(&error));
                                break;
                            }
                        }
                    }
                    println!();
                }
                Err(error) => {
                    log::warn!("Re-query failed: {}", error.technical_details());
                    println!("panel> {}", Self::chat_fallback(&error));
                }
            }
        }

        println!("👋 Bye");
        Ok(())
    }

    /// Runs one search and replaces the held session wholesale, so output is
    /// always produced from the newest result (last-response-wins).
    async fn run_search(&mut self, config: &Config, query: &str, limit: Option<usize>) -> PanelResult<SearchSession> {
        let client = SearchClient::new(&config.api)?;
        let session = client.search(query, limit).await?;
        if let Err(error) = LastQueryStore::save(query) {
            log::warn!("Could not persist last query: {}", error);
        }
        self.session = Some(session.clone());
        Ok(session)
    }

    fn resolve_query(query: Option<String>) -> PanelResult<String> {
        if let Some(query) = query {
            return Ok(query);
        }
        match LastQueryStore::load()? {
            Some(saved) => {
                println!("📋 Re-running last query: {}", saved);
                Ok(saved)
            }
            None => Err(PanelError::UserInputError {
                input: String::new(),
                expected: "a search query".to_string(),
                suggestion: "Pass a query, e.g. panelscope search \"서울에 사는 30대 흡연자\"".to_string(),
            }),
        }
    }

    fn resolve_export_path(
        config: &Config,
        dimension: Dimension,
        target: Option<PathBuf>,
    ) -> PanelResult<PathBuf> {
        if let Some(path) = target {
            return Ok(path);
        }
        let dir = PathBuf::from(&config.export.output_dir);
        std::fs::create_dir_all(&dir)
            .map_err(|e| PanelError::export_error(&dir.display().to_string(), &e.to_string()))?;
        let filename = format!(
            "panelscope_{}_{}.csv",
            dimension.field_name(),
            Local::now().format("%Y%m%d_%H%M%S")
        );
        Ok(dir.join(filename))
    }

    /// Canned chat failure message; a recoverable re-query error carries the
    /// server-provided detail and overrides it.
    fn chat_fallback(error: &PanelError) -> String {
        match error {
            PanelError::SearchError { stage, reason, .. } if stage == "re-query" => reason.clone(),
            _ => REQUERY_FALLBACK_MESSAGE.to_string(),
        }
    }

    fn print_chart_row(row: &ChartRow) {
        let summary = row
            .charts
            .iter()
            .map(|chart| format!("[{}] {} ({} buckets)", chart.chart_type, chart.title, chart.data.len()))
            .collect::<Vec<String>>()
            .join("  |  ");
        println!("  {}col  {}", row.cols, summary);
    }
}
