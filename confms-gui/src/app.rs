use confms_core::{
    ActivityGroup, ActivityRecord, AuditLogRow, BackupFile, ControlModel, NavButton, PageSlice,
    PaginatedView, PaginationControl, PortalConfig, RecordKind, RecordSummary, StripEntry,
    filter_by_group, parse_records,
};
use iced::widget::{button, column, container, pick_list, row, scrollable, text};
use iced::{Element, Length, Task};
use rfd::AsyncFileDialog;
use std::path::PathBuf;

/// Records read from disk, tagged by the screen they belong to
#[derive(Debug, Clone)]
pub enum LoadedRecords {
    Activity(Vec<ActivityRecord>),
    AuditLog(Vec<AuditLogRow>),
    Backup(Vec<BackupFile>),
}

#[derive(Debug, Clone)]
pub enum Message {
    ScreenSelected(RecordKind),
    PageChanged(usize),
    GroupChanged(ActivityGroup),
    OpenFile,
    FileChosen(RecordKind, Option<PathBuf>),
    RecordsLoaded(PathBuf, Result<LoadedRecords, String>),
    // Absolute index into the screen's full list
    DeleteRow(usize),
}

pub struct AppState {
    screen: RecordKind,
    // Unfiltered history; the paginated view holds the filtered copy
    activity_source: Vec<ActivityRecord>,
    activity_group: ActivityGroup,
    activities: PaginatedView<ActivityRecord>,
    audit_log: PaginatedView<AuditLogRow>,
    backups: PaginatedView<BackupFile>,
    is_loading: bool,
    display_text: String,
    error_message: Option<String>,
}

impl AppState {
    pub fn new(config: &PortalConfig) -> Self {
        let items_per_page = config.items_per_page;
        Self {
            screen: RecordKind::Activity,
            activity_source: Vec::new(),
            activity_group: ActivityGroup::All,
            activities: paginated(items_per_page),
            audit_log: paginated(items_per_page),
            backups: paginated(items_per_page),
            is_loading: false,
            display_text: "Open a JSON export to browse records".to_string(),
            error_message: None,
        }
    }

    fn apply_loaded(&mut self, records: LoadedRecords) -> (RecordKind, usize) {
        match records {
            LoadedRecords::Activity(records) => {
                let count = records.len();
                self.activities
                    .set_items(filter_by_group(&records, self.activity_group));
                self.activity_source = records;
                (RecordKind::Activity, count)
            }
            LoadedRecords::AuditLog(rows) => {
                let count = rows.len();
                self.audit_log.set_items(rows);
                (RecordKind::AuditLog, count)
            }
            LoadedRecords::Backup(backups) => {
                let count = backups.len();
                self.backups.set_items(backups);
                (RecordKind::Backup, count)
            }
        }
    }

    fn delete_row(&mut self, index: usize) {
        match self.screen {
            RecordKind::Activity => {
                if let Some(removed) = self.activities.remove(index) {
                    self.activity_source.retain(|record| record.id != removed.id);
                    log::info!("Removed activity {}", removed.id);
                }
            }
            RecordKind::AuditLog => {
                if let Some(removed) = self.audit_log.remove(index) {
                    log::info!("Removed audit log row {}", removed.id);
                }
            }
            RecordKind::Backup => {
                if let Some(removed) = self.backups.remove(index) {
                    log::info!("Removed backup {}", removed.filename);
                }
            }
        }
    }
}

// Config validation already rejected a zero page size
fn paginated<T>(items_per_page: usize) -> PaginatedView<T> {
    PaginatedView::new(Vec::new(), items_per_page)
        .unwrap_or_else(|_| PaginatedView::with_default_page_size(Vec::new()))
}

async fn load_records_file(kind: RecordKind, path: PathBuf) -> Result<LoadedRecords, String> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let parsed = match kind {
        RecordKind::Activity => parse_records(&contents).map(LoadedRecords::Activity),
        RecordKind::AuditLog => parse_records(&contents).map(LoadedRecords::AuditLog),
        RecordKind::Backup => parse_records(&contents).map(LoadedRecords::Backup),
    };
    parsed.map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

fn load_task(kind: RecordKind, path: PathBuf) -> Task<Message> {
    let source = path.clone();
    Task::perform(load_records_file(kind, path), move |result| {
        Message::RecordsLoaded(source.clone(), result)
    })
}

pub fn initialize(config: PortalConfig) -> (AppState, Task<Message>) {
    let state = AppState::new(&config);

    // Preload whatever exports exist in the configured data directory
    let tasks: Vec<Task<Message>> = RecordKind::ALL
        .iter()
        .filter_map(|kind| config.data_file(*kind).map(|path| (*kind, path)))
        .filter(|(_, path)| path.exists())
        .map(|(kind, path)| {
            log::debug!("Preloading {} from {}", kind, path.display());
            load_task(kind, path)
        })
        .collect();

    (state, Task::batch(tasks))
}

pub fn update(state: &mut AppState, message: Message) -> Task<Message> {
    match message {
        Message::ScreenSelected(kind) => {
            state.screen = kind;
            state.error_message = None;
        }
        Message::PageChanged(page) => match state.screen {
            RecordKind::Activity => state.activities.set_current_page(page),
            RecordKind::AuditLog => state.audit_log.set_current_page(page),
            RecordKind::Backup => state.backups.set_current_page(page),
        },
        Message::GroupChanged(group) => {
            state.activity_group = group;
            state
                .activities
                .set_items(filter_by_group(&state.activity_source, group));
            log::debug!(
                "History filter {} keeps {} of {} activities",
                group,
                state.activities.total_items(),
                state.activity_source.len()
            );
        }
        Message::OpenFile => {
            let kind = state.screen;
            return Task::perform(
                async move {
                    AsyncFileDialog::new()
                        .set_title(format!("Open {} export", kind))
                        .add_filter("JSON Files", &["json"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                move |path| Message::FileChosen(kind, path),
            );
        }
        Message::FileChosen(kind, Some(path)) => {
            state.is_loading = true;
            state.error_message = None;
            state.display_text = format!("Loading {}...", path.display());
            return load_task(kind, path);
        }
        Message::FileChosen(_, None) => {
            log::debug!("File dialog cancelled");
        }
        Message::RecordsLoaded(path, Ok(records)) => {
            state.is_loading = false;
            let (kind, count) = state.apply_loaded(records);
            state.screen = kind;
            state.display_text = format!("Loaded {} {} from {}", count, kind.item_name(), path.display());
            log::info!("{}", state.display_text);
        }
        Message::RecordsLoaded(_, Err(error)) => {
            state.is_loading = false;
            log::error!("{}", error);
            state.error_message = Some(error);
        }
        Message::DeleteRow(index) => state.delete_row(index),
    }

    Task::none()
}

fn nav_button<'a>(label: &'a str, nav: NavButton) -> Element<'a, Message> {
    button(label)
        .on_press_maybe(nav.press().map(Message::PageChanged))
        .padding(5)
        .into()
}

/// Pagination controls; an empty row when there is nothing to page through
fn pagination_controls<'a>(model: Option<ControlModel>) -> Element<'a, Message> {
    let Some(model) = model else {
        return row![].into();
    };

    let mut strip = row![].spacing(4);
    for entry in &model.strip {
        strip = match *entry {
            StripEntry::Page { number, active } => {
                let style: fn(&iced::Theme, button::Status) -> button::Style = if active {
                    button::primary
                } else {
                    button::secondary
                };
                strip.push(
                    button(text(number.to_string()))
                        .style(style)
                        .on_press(Message::PageChanged(number))
                        .padding(5),
                )
            }
            StripEntry::Ellipsis => strip.push(text("...").size(14)),
        };
    }

    column![
        text(model.info.to_string()).size(14),
        row![
            nav_button("First", model.first),
            nav_button("Previous", model.prev),
            strip,
            nav_button("Next", model.next),
            nav_button("Last", model.last),
        ]
        .spacing(10),
    ]
    .spacing(5)
    .into()
}

fn record_list<'a, T: RecordSummary>(page: &PageSlice<'a, T>) -> Element<'a, Message> {
    if page.items.is_empty() {
        return text("No records").size(14).into();
    }

    let mut rows = column![].spacing(4);
    for (offset, record) in page.items.iter().enumerate() {
        let index = page.start_index + offset;
        rows = rows.push(
            row![
                text(record.summary())
                    .font(iced::Font::MONOSPACE)
                    .size(14)
                    .width(Length::Fill),
                button("Delete").on_press(Message::DeleteRow(index)).padding(3),
            ]
            .spacing(10),
        );
    }

    scrollable(rows).height(Length::Fill).into()
}

fn screen_body<'a, T: RecordSummary>(
    view: &'a PaginatedView<T>,
    kind: RecordKind,
) -> (Element<'a, Message>, Option<ControlModel>) {
    let page = view.page();
    let control = PaginationControl::for_page(&page, kind.item_name()).render();
    (record_list(&page), control)
}

pub fn view(state: &AppState) -> Element<'_, Message> {
    let mut tabs = row![].spacing(10);
    for kind in RecordKind::ALL {
        tabs = tabs.push(
            button(text(kind.to_string()))
                .on_press_maybe((state.screen != kind).then_some(Message::ScreenSelected(kind)))
                .padding(8),
        );
    }

    let mut toolbar = row![
        button(if state.is_loading {
            "Loading..."
        } else {
            "Open JSON Export"
        })
        .on_press_maybe(if state.is_loading {
            None
        } else {
            Some(Message::OpenFile)
        })
        .padding(8),
    ]
    .spacing(10);

    // Group filter only applies to the history screen
    if state.screen == RecordKind::Activity {
        toolbar = toolbar.push(text("Show:").size(14));
        toolbar = toolbar.push(pick_list(
            ActivityGroup::ALL,
            Some(state.activity_group),
            Message::GroupChanged,
        ));
    }

    let (body, control) = match state.screen {
        RecordKind::Activity => screen_body(&state.activities, RecordKind::Activity),
        RecordKind::AuditLog => screen_body(&state.audit_log, RecordKind::AuditLog),
        RecordKind::Backup => screen_body(&state.backups, RecordKind::Backup),
    };

    let status = match &state.error_message {
        Some(error) => text(format!("Error: {}", error)).size(14),
        None => text(state.display_text.as_str()).size(14),
    };

    container(
        column![
            tabs,
            toolbar,
            text(state.screen.to_string()).size(20),
            container(body).height(Length::Fill),
            pagination_controls(control),
            status,
        ]
        .spacing(12),
    )
    .padding(20)
    .into()
}
