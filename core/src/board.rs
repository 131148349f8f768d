use crate::catalog::{Catalog, Suggestion, VoteDirection};
use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::ids::{now_millis, IdGenerator};
use crate::query::{SessionState, SortMode, TopicFilter};
use crate::submission;
use crate::view::BoardView;
use crate::vote::{VoteLedger, VoteReceipt};
use serde::{Deserialize, Serialize};

/// One user interaction with the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BoardEvent {
    SetQuery {
        query: String,
    },
    SetTopicFilter {
        filter: TopicFilter,
    },
    SetSort {
        sort: SortMode,
    },
    EditForm {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        details: Option<String>,
        #[serde(default)]
        tags: Option<String>,
    },
    Vote {
        id: String,
        direction: VoteDirection,
    },
    Submit,
}

impl BoardEvent {
    pub fn from_json_line(line: &str) -> BoardResult<Self> {
        serde_json::from_str(line).map_err(BoardError::from)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EventOutcome {
    /// Session inputs changed; views re-derive on next read.
    Updated,
    Voted { receipt: VoteReceipt },
    Submitted { suggestion: Suggestion },
    /// Vote on an unknown id or submission with a blank title.
    Ignored,
}

/// A single-user board session: catalog, current inputs, and vote history.
#[derive(Debug)]
pub struct Board {
    catalog: Catalog,
    session: SessionState,
    ledger: VoteLedger,
    ids: IdGenerator,
}

impl Board {
    pub fn new(catalog: Catalog, session: SessionState) -> Self {
        Self {
            catalog,
            session,
            ledger: VoteLedger::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Sample catalog with default session inputs.
    pub fn sample() -> Self {
        Self::new(Catalog::sample(now_millis()), SessionState::default())
    }

    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        let catalog = config.seed_catalog(now_millis())?;
        Ok(Self::new(catalog, config.session_state()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn ledger(&self) -> &VoteLedger {
        &self.ledger
    }

    pub fn set_query(&mut self, query: &str) {
        self.session.query = query.to_string();
    }

    pub fn set_topic_filter(&mut self, filter: TopicFilter) {
        self.session.topic_filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.session.sort = sort;
    }

    pub fn vote(&mut self, id: &str, direction: VoteDirection) -> Option<VoteReceipt> {
        self.ledger.apply(&mut self.catalog, id, direction)
    }

    pub fn submit(&mut self) -> Option<Suggestion> {
        self.submit_at(now_millis())
    }

    pub fn submit_at(&mut self, now_ms: i64) -> Option<Suggestion> {
        submission::submit(
            &mut self.session.form,
            &mut self.catalog,
            &mut self.ids,
            now_ms,
        )
    }

    pub fn apply(&mut self, event: BoardEvent) -> EventOutcome {
        tracing::debug!(?event, "applying board event");
        match event {
            BoardEvent::SetQuery { query } => {
                self.set_query(&query);
                EventOutcome::Updated
            }
            BoardEvent::SetTopicFilter { filter } => {
                self.set_topic_filter(filter);
                EventOutcome::Updated
            }
            BoardEvent::SetSort { sort } => {
                self.set_sort(sort);
                EventOutcome::Updated
            }
            BoardEvent::EditForm {
                title,
                details,
                tags,
            } => {
                let form = &mut self.session.form;
                if let Some(title) = title {
                    form.title = title;
                }
                if let Some(details) = details {
                    form.details = details;
                }
                if let Some(tags) = tags {
                    form.tags = tags;
                }
                EventOutcome::Updated
            }
            BoardEvent::Vote { id, direction } => match self.vote(&id, direction) {
                Some(receipt) => EventOutcome::Voted { receipt },
                None => EventOutcome::Ignored,
            },
            BoardEvent::Submit => match self.submit() {
                Some(suggestion) => EventOutcome::Submitted { suggestion },
                None => EventOutcome::Ignored,
            },
        }
    }

    pub fn view(&self) -> BoardView {
        BoardView::build(&self.catalog, &self.session)
    }
}
