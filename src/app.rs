use ratatui::layout::Rect;

use crate::data::{Catalog, GenreMap};
use crate::modal::{Modal, ModalItem};

/// Which pane has keyboard focus in the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Genres,
    Podcasts,
}

/// Input mode for the filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Screen areas recorded by the renderer each frame so mouse events can be
/// resolved against the current layout. Zero-sized rects match nothing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub sidebar: Rect,
    pub list: Rect,
    pub modal_card: Rect,
    pub modal_close: Rect,
    pub modal_rows: Vec<Rect>,
}

impl HitAreas {
    pub fn clear_modal(&mut self) {
        self.modal_card = Rect::default();
        self.modal_close = Rect::default();
        self.modal_rows.clear();
    }
}

pub const LIST_OVERHEAD: u16 = 10;

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub genre_map: GenreMap,
    pub modal: Modal,
    pub should_quit: bool,
    pub show_help: bool,
    pub focus: Focus,

    // Text filter
    pub filter: String,
    pub input_mode: InputMode,

    // Genre sidebar: index 0 is "All", 1..=len are genres.
    pub genre_selected: usize,
    pub genre_filter: Option<usize>,

    // Podcast list state
    pub filtered: Vec<usize>,
    pub list_selected: usize,
    pub list_offset: usize,
    pub page_size: usize,

    pub status_msg: String,
    pub hits: HitAreas,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let genre_map = catalog.genre_map();
        let modal = Modal::new(genre_map.clone(), catalog.podcasts.clone());

        let mut app = Self {
            catalog,
            genre_map,
            modal,
            should_quit: false,
            show_help: false,
            focus: Focus::Podcasts,

            filter: String::new(),
            input_mode: InputMode::Normal,

            genre_selected: 0,
            genre_filter: None,

            filtered: Vec::new(),
            list_selected: 0,
            list_offset: 0,
            page_size: 20, // Updated on first render/resize

            status_msg: String::new(),
            hits: HitAreas::default(),
        };
        app.apply_filter();
        app
    }

    /// Recompute the visible podcast set from the genre filter and the text
    /// filter, then reset list position.
    pub fn apply_filter(&mut self) {
        let needle = self.filter.to_lowercase();
        let genre = self.genre_filter.and_then(|i| self.catalog.genres.get(i));

        self.filtered.clear();
        for (i, podcast) in self.catalog.podcasts.iter().enumerate() {
            if let Some(g) = genre {
                if !g.contains(&podcast.id) {
                    continue;
                }
            }
            if !needle.is_empty()
                && !podcast.title.to_lowercase().contains(&needle)
                && !podcast.description.to_lowercase().contains(&needle)
            {
                continue;
            }
            self.filtered.push(i);
        }

        self.list_offset = 0;
        self.list_selected = 0;

        let scope = match genre {
            Some(g) => g.title.as_str(),
            None => "all genres",
        };
        self.status_msg = if self.filtered.is_empty() {
            "No podcasts found".to_string()
        } else {
            format!("{} podcasts in {}", self.filtered.len(), scope)
        };
    }

    /// Podcast indices on the current page.
    pub fn page(&self) -> &[usize] {
        let end = (self.list_offset + self.page_size).min(self.filtered.len());
        &self.filtered[self.list_offset.min(end)..end]
    }

    pub fn update_page_size(&mut self, terminal_height: u16) {
        self.page_size = (terminal_height.saturating_sub(LIST_OVERHEAD) as usize).max(1);
        self.clamp_list_position();
    }

    fn clamp_list_position(&mut self) {
        if self.list_offset >= self.filtered.len() {
            self.list_offset = 0;
        }
        let page_len = self.page().len();
        if self.list_selected >= page_len {
            self.list_selected = page_len.saturating_sub(1);
        }
    }

    pub fn list_next(&mut self) {
        let page_len = self.page().len();
        if page_len == 0 {
            return;
        }
        if self.list_selected + 1 < page_len {
            self.list_selected += 1;
        } else if self.list_offset + self.page_size < self.filtered.len() {
            self.list_offset += self.page_size;
            self.list_selected = 0;
        }
    }

    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
        } else if self.list_offset > 0 {
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.list_selected = self.page().len().saturating_sub(1);
        }
    }

    pub fn list_page_down(&mut self) {
        if self.list_offset + self.page_size < self.filtered.len() {
            self.list_offset += self.page_size;
            self.list_selected = 0;
        } else {
            self.list_selected = self.page().len().saturating_sub(1);
        }
    }

    pub fn list_page_up(&mut self) {
        self.list_offset = self.list_offset.saturating_sub(self.page_size);
        self.list_selected = 0;
    }

    pub fn list_home(&mut self) {
        self.list_offset = 0;
        self.list_selected = 0;
    }

    pub fn list_end(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let last_page_start = ((self.filtered.len() - 1) / self.page_size) * self.page_size;
        self.list_offset = last_page_start;
        self.list_selected = self.page().len().saturating_sub(1);
    }

    /// Number of sidebar entries ("All" plus one per genre).
    pub fn genre_entries(&self) -> usize {
        self.catalog.genres.len() + 1
    }

    pub fn genre_next(&mut self) {
        if self.genre_selected + 1 < self.genre_entries() {
            self.genre_selected += 1;
        }
    }

    pub fn genre_prev(&mut self) {
        self.genre_selected = self.genre_selected.saturating_sub(1);
    }

    /// Apply the highlighted sidebar entry as the genre filter.
    pub fn apply_selected_genre(&mut self) {
        self.genre_filter = match self.genre_selected {
            0 => None,
            n => Some(n - 1),
        };
        self.apply_filter();
    }

    /// Open the detail modal on the podcast highlighted in the list.
    pub fn open_selected_podcast(&mut self) {
        let index = self.list_offset + self.list_selected;
        if let Some(&podcast_index) = self.filtered.get(index) {
            let podcast = self.catalog.podcasts[podcast_index].clone();
            self.modal.open(ModalItem::Podcast(podcast));
        }
    }

    /// Open the detail modal on a podcast by its position in the current page.
    pub fn open_podcast_at(&mut self, page_row: usize) {
        let podcast_index = match self.page().get(page_row) {
            Some(&i) => i,
            None => return,
        };
        self.list_selected = page_row;
        let podcast = self.catalog.podcasts[podcast_index].clone();
        self.modal.open(ModalItem::Podcast(podcast));
    }

    /// Open the detail modal on the genre highlighted in the sidebar.
    /// Entry 0 ("All") has no detail view.
    pub fn open_selected_genre(&mut self) {
        if self.genre_selected == 0 {
            return;
        }
        if let Some(genre) = self.catalog.genres.get(self.genre_selected - 1) {
            let genre = genre.clone();
            self.modal.open(ModalItem::Genre(genre));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Genre, IdValue, Podcast};

    fn catalog() -> Catalog {
        let podcasts = vec![
            Podcast {
                id: IdValue::Num(3),
                title: "Midnight Archive".to_string(),
                description: "Cold cases and colder trails".to_string(),
                image: String::new(),
                updated: None,
                genres: vec![IdValue::Num(2)],
                seasons: 2,
            },
            Podcast {
                id: IdValue::Text("7".to_string()),
                title: "The Long Way Home".to_string(),
                description: "Slow travel stories".to_string(),
                image: String::new(),
                updated: None,
                genres: vec![IdValue::Num(1)],
                seasons: 1,
            },
            Podcast {
                id: IdValue::Num(9),
                title: "Signal & Static".to_string(),
                description: "Radio history".to_string(),
                image: String::new(),
                updated: None,
                genres: vec![IdValue::Num(2)],
                seasons: 4,
            },
        ];
        let genres = vec![
            Genre {
                id: IdValue::Num(1),
                title: "Personal Growth".to_string(),
                description: String::new(),
                shows: vec![IdValue::Num(7)],
            },
            Genre {
                id: IdValue::Num(2),
                title: "History".to_string(),
                description: String::new(),
                shows: vec![IdValue::Num(3), IdValue::Text("9".to_string())],
            },
        ];
        Catalog { podcasts, genres }
    }

    #[test]
    fn test_no_filter_shows_everything() {
        let app = App::new(catalog());
        assert_eq!(app.filtered, vec![0, 1, 2]);
    }

    #[test]
    fn test_genre_filter_matches_mixed_id_types() {
        let mut app = App::new(catalog());
        app.genre_selected = 2; // History
        app.apply_selected_genre();
        assert_eq!(app.filtered, vec![0, 2]);

        app.genre_selected = 1; // Personal Growth, member id stored as a number
        app.apply_selected_genre();
        assert_eq!(app.filtered, vec![1]);
    }

    #[test]
    fn test_text_and_genre_filters_combine() {
        let mut app = App::new(catalog());
        app.genre_selected = 2;
        app.apply_selected_genre();
        app.filter = "radio".to_string();
        app.apply_filter();
        assert_eq!(app.filtered, vec![2]);
    }

    #[test]
    fn test_empty_result_sets_status() {
        let mut app = App::new(catalog());
        app.filter = "zzz".to_string();
        app.apply_filter();
        assert!(app.filtered.is_empty());
        assert_eq!(app.status_msg, "No podcasts found");
    }

    #[test]
    fn test_open_selected_podcast_opens_modal() {
        let mut app = App::new(catalog());
        app.list_selected = 1;
        app.open_selected_podcast();
        assert!(app.modal.is_visible());
        assert_eq!(app.modal.content().title, "The Long Way Home");
    }

    #[test]
    fn test_open_selected_genre_skips_all_entry() {
        let mut app = App::new(catalog());
        app.genre_selected = 0;
        app.open_selected_genre();
        assert!(!app.modal.is_visible());

        app.genre_selected = 2;
        app.open_selected_genre();
        assert!(app.modal.is_visible());
        assert_eq!(app.modal.content().title, "History");
    }

    #[test]
    fn test_list_navigation_pages_through_results() {
        let mut app = App::new(catalog());
        app.page_size = 2;
        app.list_next();
        assert_eq!((app.list_offset, app.list_selected), (0, 1));
        app.list_next();
        assert_eq!((app.list_offset, app.list_selected), (2, 0));
        app.list_next();
        assert_eq!((app.list_offset, app.list_selected), (2, 0));
        app.list_prev();
        assert_eq!((app.list_offset, app.list_selected), (0, 1));
    }

    #[test]
    fn test_genre_navigation_clamps() {
        let mut app = App::new(catalog());
        app.genre_prev();
        assert_eq!(app.genre_selected, 0);
        for _ in 0..10 {
            app.genre_next();
        }
        assert_eq!(app.genre_selected, 2);
    }
}
