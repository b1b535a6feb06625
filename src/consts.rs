use std::time::Duration;

/// Maximum task title length (inclusive), counted in characters
pub const TITLE_MAX_LENGTH: usize = 255;

/// Maximum task description length (inclusive), counted in characters
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

/// Maximum category name length (inclusive), counted in characters
pub const CATEGORY_MAX_LENGTH: usize = 50;

/// Description length above which the expand/collapse control shows
pub const DESCRIPTION_EXPAND_THRESHOLD: usize = 100;

/// Category assigned to tasks created without one
pub const DEFAULT_CATEGORY: &str = "Misc";

/// Number of tasks appended per lazy-load batch
pub const LAZY_LOAD_BATCH_SIZE: usize = 10;
/// Number of tasks rendered up front before lazy loading takes over
pub const LAZY_LOAD_INITIAL_COUNT: usize = 10;

/// Delay before the date picker opens
pub const DATE_PICKER_DELAY: Duration = Duration::from_millis(10);
/// Delay before a lazy-load batch is requested
pub const LAZY_LOAD_DELAY: Duration = Duration::from_millis(50);
/// Delay before a fetched batch is rendered
pub const LAZY_LOAD_RENDER_DELAY: Duration = Duration::from_millis(150);
/// Delay before the lazy-load observer re-arms after a batch
pub const LAZY_LOAD_OBSERVER_DELAY: Duration = Duration::from_millis(50);
/// Delay before the lazy-load observer is first installed
pub const SETUP_LAZY_LOAD_DELAY: Duration = Duration::from_millis(200);
/// Delay between view mount and lazy-load setup
pub const ON_MOUNT_LAZY_LOAD_DELAY: Duration = Duration::from_millis(100);
/// Stagger between consecutive task card entrance animations
pub const TASK_ANIMATION_DELAY: Duration = Duration::from_millis(50);

/// Scroll offset in pixels past which the back-to-top button shows
pub const SCROLL_TO_TOP_THRESHOLD: u32 = 300;
/// Root margin handed to the lazy-load intersection observer
pub const INTERSECTION_OBSERVER_ROOT_MARGIN: &str = "100px";

/// Format tried on the date portion once separators are normalized
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback formats tried in order against the raw date portion.
/// Month-first wins when an input satisfies both.
pub const FALLBACK_DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%d/%m/%Y"];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator normalized to [`DATE_SEPARATOR`] before parsing
pub const ALT_DATE_SEPARATOR: char = '/';
/// Characters that split a date portion from a trailing time of day
pub const TIME_SEPARATORS: [char; 2] = ['T', ' '];
