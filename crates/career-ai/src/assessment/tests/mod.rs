mod common;
mod insights;
mod matcher;
