use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    api::CocktailClient,
    config::{Commands, Config},
    debounce::Debouncer,
    error::AppResult,
    pie_chart::{build_slices, render_svg},
    recency::{SearchHistory, ViewedDrinks},
    render,
    search::{effective_query, search_results},
    store::FileStore,
};

/// Everything a command needs: API client and the two recency lists over one
/// shared store file.
pub struct App {
    pub config: Config,
    pub client: CocktailClient,
    pub history: SearchHistory<Arc<FileStore>>,
    pub viewed: ViewedDrinks<Arc<FileStore>>,
    ansi: bool,
}

impl App {
    /// # Errors
    ///
    /// Will return err if the API URL is invalid or the store file's directory can't be created
    pub fn new(config: Config) -> AppResult<Self> {
        let client = CocktailClient::new(&config.api_url, config.timeout())?;
        let store = Arc::new(FileStore::open(&config.data_file)?);
        Ok(Self {
            client,
            history: SearchHistory::new(store.clone()),
            viewed: ViewedDrinks::new(store),
            ansi: std::io::stdout().is_terminal(),
            config,
        })
    }

    /// # Errors
    ///
    /// Will return err if a request fails or an output file can't be written
    pub async fn run(self: Arc<Self>, command: Commands) -> anyhow::Result<()> {
        match command {
            Commands::Search { query } => self.search(&query.join(" ")).await?,
            Commands::Show { id, svg } => self.show(&id, svg.as_deref()).await?,
            Commands::History { clear } => self.print_history(clear),
            Commands::Viewed { clear } => self.print_viewed(clear),
            Commands::Watch => self.watch().await?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Will return err if the search request fails
    pub async fn search(&self, query: &str) -> AppResult<()> {
        let effective = effective_query(query);
        let response = self.client.search(effective).await?;
        if !query.trim().is_empty() {
            self.history.add(query.to_string());
        }

        let items = search_results(&response, effective);
        tracing::info!(query = effective, results = items.len(), "search finished");
        if items.is_empty() {
            println!("No drinks found for \"{effective}\"");
            return Ok(());
        }
        for line in render::result_lines(&items, effective, self.ansi) {
            println!("{line}");
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Will return err if the lookup fails or the SVG can't be written
    pub async fn show(&self, id: &str, svg: Option<&Path>) -> AppResult<()> {
        let Some(drink) = self.client.drink_details(id).await? else {
            println!("No drink with id {}", id.trim());
            return Ok(());
        };
        self.viewed.add(drink.list_item());
        print!("{}", render::drink_details(&drink));

        if let Some(path) = svg {
            let slices = build_slices(&drink.ingredients, self.config.chart_size);
            match render_svg(&slices, self.config.chart_size) {
                Some(doc) => {
                    std::fs::write(path, doc)?;
                    tracing::info!(path = %path.display(), slices = slices.len(), "pie chart written");
                }
                None => tracing::warn!(drink_id = %drink.id, "no measurable ingredients, pie chart skipped"),
            }
        }
        Ok(())
    }

    pub fn print_history(&self, clear: bool) {
        if clear {
            self.history.clear();
            return;
        }
        for term in self.history.list() {
            println!("{term}");
        }
    }

    pub fn print_viewed(&self, clear: bool) {
        if clear {
            self.viewed.clear();
            return;
        }
        for d in self.viewed.list() {
            println!("{:>7}  {}", d.id, d.name);
        }
    }

    /// One search per settled line of stdin; the last pending line runs at EOF.
    ///
    /// # Errors
    ///
    /// Will return err if stdin can't be read
    pub async fn watch(self: Arc<Self>) -> AppResult<()> {
        let app = self.clone();
        let debouncer = Debouncer::new(self.config.debounce(), move |query: String| {
            let app = app.clone();
            async move {
                if let Err(e) = app.search(&query).await {
                    tracing::error!(query = %query, "search failed: {e}");
                }
            }
        });

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            debouncer.call(line);
        }
        debouncer.finish().await;
        Ok(())
    }
}
