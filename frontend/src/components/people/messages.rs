use common::model::person::PersonRow;

use crate::api::ApiError;
use crate::components::data_table::TableAction;

pub enum Msg {
    NameInput(String),
    SurnameInput(String),
    DragOver,
    DragLeave,
    /// First file from a drop or the file picker. Validation happens in
    /// `update`, not at the event site.
    FileOffered(web_sys::File),
    OpenFileDialog,
    Submit,
    Created,
    CreateFailed(ApiError),
    LoadPeople,
    RowsLoaded(Vec<PersonRow>),
    LoadFailed(ApiError),
    TableAction(TableAction),
    Deleted,
    DeleteFailed(ApiError),
}
