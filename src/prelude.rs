pub use crate::cli::{command, run_app, run_menu};
pub use crate::domain::{
    contact::{self, Contact, MAX_FIELD_LEN},
    store::{ContactStore, LoadReport, Removal, SortKey, is_affirmative},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStorage, CsvStorage, TxtStorage};
