use common::error::LoadError;
use common::model::SubmissionRecord;

pub enum Msg {
    UpdateQuery(String),
    Submit,
    QuickFill(String),
    Loaded(Vec<SubmissionRecord>),
    LoadFailed(LoadError),
}
