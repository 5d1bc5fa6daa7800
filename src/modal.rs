use chrono::{DateTime, Utc};

use crate::data::{GenreMap, IdValue, Podcast};

/// What the detail modal is currently showing.
#[derive(Debug, Clone)]
pub enum ModalItem {
    Podcast(Podcast),
    Genre(crate::data::Genre),
}

/// Cover region content. Absent when the record carries no artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cover {
    pub image: String,
    pub title: String,
}

/// One row of the modal body. Rows with a `link` are clickable and re-open
/// the modal on the linked podcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub text: String,
    pub link: Option<IdValue>,
}

impl BodyRow {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    fn show(text: impl Into<String>, id: IdValue) -> Self {
        Self {
            text: text.into(),
            link: Some(id),
        }
    }
}

pub const NO_SHOWS_FALLBACK: &str = "No shows available for this genre.";

/// The fixed set of display regions the modal projects a record onto.
/// Rebuilt from scratch on every `open`; the renderer only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalContent {
    pub cover: Option<Cover>,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub updated: String,
    pub section_label: &'static str,
    pub rows: Vec<BodyRow>,
}

/// Detail modal: a single visibility-stateful component over a read-only
/// genre-name table and the full podcast list (needed only to resolve
/// "shows in this genre").
#[derive(Debug)]
pub struct Modal {
    genre_map: GenreMap,
    podcasts: Vec<Podcast>,
    visible: bool,
    content: ModalContent,
    selected_row: usize,
}

impl Modal {
    pub fn new(genre_map: GenreMap, podcasts: Vec<Podcast>) -> Self {
        Self {
            genre_map,
            podcasts,
            visible: false,
            content: ModalContent::default(),
            selected_row: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> &ModalContent {
        &self.content
    }

    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Open the modal on `item`, fully re-rendering every region. Opening
    /// while already open replaces the previous content without an
    /// explicit close.
    pub fn open(&mut self, item: ModalItem) {
        self.content = match item {
            ModalItem::Podcast(p) => project_podcast(&p, &self.genre_map),
            ModalItem::Genre(g) => project_genre(&g, &self.genre_map, &self.podcasts),
        };
        self.selected_row = 0;
        self.visible = true;
    }

    /// Hide the modal. Content is retained and overwritten on the next
    /// `open`. Closing an already-closed modal is a no-op.
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Activate a body row. For a genre's show row this re-opens the modal
    /// in podcast mode; plain rows do nothing. One level only: a podcast
    /// modal has no linked rows.
    pub fn activate_row(&mut self, index: usize) {
        let Some(row) = self.content.rows.get(index) else {
            return;
        };
        let Some(id) = row.link.clone() else {
            return;
        };
        if let Some(podcast) = self.podcasts.iter().find(|p| p.id.matches(&id)) {
            let podcast = podcast.clone();
            self.open(ModalItem::Podcast(podcast));
        }
    }

    pub fn activate_selected(&mut self) {
        self.activate_row(self.selected_row);
    }

    pub fn row_next(&mut self) {
        if self.selected_row + 1 < self.content.rows.len() {
            self.selected_row += 1;
        }
    }

    pub fn row_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }
}

fn project_podcast(podcast: &Podcast, genre_map: &GenreMap) -> ModalContent {
    let cover = if podcast.image.is_empty() {
        None
    } else {
        Some(Cover {
            image: podcast.image.clone(),
            title: podcast.title.clone(),
        })
    };

    let rows = if podcast.seasons > 0 {
        vec![BodyRow::plain(format!("Seasons: {}", podcast.seasons))]
    } else {
        Vec::new()
    };

    ModalContent {
        cover,
        title: podcast.title.clone(),
        description: podcast.description.clone(),
        tags: render_tags(&podcast.genres, genre_map),
        updated: format_updated(podcast.updated.as_ref()),
        section_label: "Seasons",
        rows,
    }
}

fn project_genre(
    genre: &crate::data::Genre,
    genre_map: &GenreMap,
    podcasts: &[Podcast],
) -> ModalContent {
    let shows: Vec<&Podcast> = podcasts.iter().filter(|p| genre.contains(&p.id)).collect();

    let rows = if shows.is_empty() {
        vec![BodyRow::plain(NO_SHOWS_FALLBACK)]
    } else {
        shows
            .iter()
            .map(|p| BodyRow::show(p.title.clone(), p.id.clone()))
            .collect()
    };

    ModalContent {
        // Genres carry no artwork.
        cover: None,
        title: genre.title.clone(),
        description: genre.description.clone(),
        // The genre's own name, rendered through the same tag helper as a
        // list of one.
        tags: render_tags(std::slice::from_ref(&genre.id), genre_map),
        updated: String::new(),
        section_label: "Shows",
        rows,
    }
}

/// Display labels for a genre-id sequence, in input order. Ids missing
/// from the map get a synthesized `Genre <id>` placeholder.
pub fn render_tags(ids: &[IdValue], genre_map: &GenreMap) -> Vec<String> {
    ids.iter()
        .map(|id| match genre_map.name(id) {
            Some(name) => name.to_string(),
            None => format!("Genre {id}"),
        })
        .collect()
}

/// Human-readable update line, or the empty string when the record has no
/// timestamp. No fallback text.
pub fn format_updated(updated: Option<&DateTime<Utc>>) -> String {
    match updated {
        Some(ts) => format!("📅 Last updated: {}", ts.format("%B %-d, %Y")),
        None => String::new(),
    }
}
