pub use crate::cli::{
    dispatch::{Outcome, Prompt, Session, SessionState},
    menu::{self, Command},
    run_app,
};
pub use crate::config::{Config, EnvType};
pub use crate::domain::{
    contact::{self, Contact, ContactInput, FIELDS, Field},
    manager::ContactManager,
    search::{contact_matches, search_contacts},
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, JsonStorage, MemStorage};
