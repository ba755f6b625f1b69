// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.
//!
//! The component owns the catalog, the current [`FilterState`], the
//! [`FilteredView`] derived from both, and the [`PreviewNavigator`]. The view
//! is recomputed synchronously in [`State::refresh_view`] after every filter
//! change, and the preview is revalidated against the new view in the same
//! step, so the grid and the lightbox can never disagree.

use super::{card, empty_state, lightbox, toolbar};
use crate::domain::document::{
    filtered_view, Catalog, CategoryFilter, DocumentRecord, FilterState, FilteredView,
};
use crate::i18n::fluent::I18n;
use crate::navigator::{PreviewAction, PreviewNavigator, PreviewState};
use crate::ui::design_tokens::spacing;
use iced::widget::{scrollable, Column, Container, Row, Space, Stack};
use iced::{Element, Length};
use std::path::PathBuf;

/// Messages emitted by gallery widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Search box content changed.
    QueryChanged(String),
    /// Category picker selection changed.
    CategorySelected(CategoryFilter),
    /// Reset query and category.
    ClearFilters,
    /// A thumbnail was clicked (index into the filtered view).
    ThumbnailPressed(usize),
    /// Lightbox navigation from buttons, backdrop, or keyboard.
    Preview(PreviewAction),
    /// View button (index into the filtered view).
    ViewDocument(usize),
    /// Download button (index into the filtered view).
    DownloadDocument(usize),
}

/// Side effects the application should perform after handling a gallery message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open this file with the platform's default handler.
    ViewDocument(PathBuf),
    /// Ask where to save a copy of `source`.
    DownloadDocument {
        source: PathBuf,
        suggested_name: String,
    },
}

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    /// Cards per row.
    pub columns: u16,
    /// Thumbnail height in logical pixels.
    pub thumbnail_height: f32,
}

/// Complete gallery component state.
#[derive(Debug, Clone)]
pub struct State {
    catalog: Catalog,
    /// Whether each record's image exists, by catalog position.
    image_available: Vec<bool>,
    filter: FilterState,
    view: FilteredView,
    navigator: PreviewNavigator,
}

impl State {
    /// Creates the gallery over `catalog`, starting on `category`.
    pub fn new(catalog: Catalog, category: CategoryFilter) -> Self {
        let image_available = catalog.iter().map(|r| r.image().is_file()).collect();
        let filter = FilterState::with_category(category);
        let view = filtered_view(&catalog, &filter);

        Self {
            catalog,
            image_available,
            filter,
            view,
            navigator: PreviewNavigator::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Current ordered subset of the catalog.
    pub fn filtered(&self) -> &FilteredView {
        &self.view
    }

    pub fn preview_state(&self) -> PreviewState {
        self.navigator.state()
    }

    /// Record shown in the lightbox, if open.
    pub fn previewed_record(&self) -> Option<&DocumentRecord> {
        self.navigator
            .current()
            .and_then(|index| self.view.record(&self.catalog, index))
    }

    /// Whether the keyboard listener must be active.
    pub fn listens_for_keys(&self) -> bool {
        self.navigator.listens_for_keys()
    }

    fn image_available(&self, position: usize) -> bool {
        self.image_available.get(position).copied().unwrap_or(false)
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::QueryChanged(query) => {
                if self.filter.query != query {
                    self.filter.query = query;
                    self.refresh_view();
                }
                Effect::None
            }
            Message::CategorySelected(category) => {
                if self.filter.category != category {
                    self.filter.category = category;
                    self.refresh_view();
                }
                Effect::None
            }
            Message::ClearFilters => {
                if self.filter.is_active() {
                    self.filter.clear();
                    self.refresh_view();
                }
                Effect::None
            }
            Message::ThumbnailPressed(index) => {
                let state = self.navigator.open(index, self.view.len());
                tracing::debug!(?state, "preview opened");
                Effect::None
            }
            Message::Preview(action) => {
                let state = self.navigator.apply(action, self.view.len());
                tracing::debug!(?action, ?state, "preview transition");
                Effect::None
            }
            Message::ViewDocument(index) => match self.view.record(&self.catalog, index) {
                Some(record) => Effect::ViewDocument(record.file().to_path_buf()),
                None => {
                    tracing::warn!(index, "view requested for a document outside the view");
                    Effect::None
                }
            },
            Message::DownloadDocument(index) => match self.view.record(&self.catalog, index) {
                Some(record) => Effect::DownloadDocument {
                    source: record.file().to_path_buf(),
                    suggested_name: record.suggested_file_name(),
                },
                None => {
                    tracing::warn!(index, "download requested for a document outside the view");
                    Effect::None
                }
            },
        }
    }

    /// Recomputes the filtered view and revalidates the preview against it.
    ///
    /// An open preview keeps showing the same document when it is still
    /// visible; otherwise its index is clamped, and it closes when the view
    /// is empty.
    fn refresh_view(&mut self) {
        let previewed = self
            .navigator
            .current()
            .and_then(|index| self.view.get(index));

        self.view = filtered_view(&self.catalog, &self.filter);
        let n = self.view.len();

        let state = match previewed.and_then(|position| self.view.index_of(position)) {
            Some(index) => self.navigator.retarget(index, n),
            None => self.navigator.revalidate(n),
        };

        tracing::debug!(
            query = %self.filter.query,
            category = self.filter.category.as_str(),
            shown = n,
            total = self.catalog.len(),
            ?state,
            "gallery view refreshed"
        );
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let header = toolbar::view(toolbar::ViewContext {
            i18n: env.i18n,
            filter: &self.filter,
            shown: self.view.len(),
            total: self.catalog.len(),
        });

        let body: Element<'a, Message> = if self.view.is_empty() {
            empty_state::view(env.i18n, self.filter.is_active())
        } else {
            self.grid(&env)
        };

        let page = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(header)
            .push(body);

        let mut stack = Stack::new().push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        );

        if let (Some(index), Some(record)) = (self.navigator.current(), self.previewed_record()) {
            let position = self.view.get(index).unwrap_or_default();
            stack = stack.push(lightbox::view(lightbox::ViewContext {
                i18n: env.i18n,
                record,
                index,
                count: self.view.len(),
                image_available: self.image_available(position),
            }));
        }

        stack.into()
    }

    fn grid<'a>(&'a self, env: &ViewEnv<'a>) -> Element<'a, Message> {
        let columns = usize::from(env.columns.max(1));
        let cards: Vec<(usize, usize, &DocumentRecord)> = self
            .view
            .positions()
            .iter()
            .enumerate()
            .filter_map(|(index, &position)| {
                self.catalog.get(position).map(|record| (index, position, record))
            })
            .collect();

        let mut rows = Column::new().spacing(spacing::LG);
        for chunk in cards.chunks(columns) {
            let mut row = Row::new().spacing(spacing::LG);
            for &(index, position, record) in chunk {
                row = row.push(card::view(card::ViewContext {
                    i18n: env.i18n,
                    index,
                    record,
                    thumbnail_height: env.thumbnail_height,
                    image_available: self.image_available(position),
                }));
            }
            // Keep card widths uniform on a short last row.
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            rows = rows.push(row);
        }

        scrollable(rows).height(Length::Fill).into()
    }
}
