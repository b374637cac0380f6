use std::sync::Arc;

use domain_campus::{
    exception::CampusResult,
    model::vo::{FormSession, Record},
    service::{DocumentPicker, ListManagerService, SpreadsheetImportService},
};
use service_campus::{ListManagerImpl, SpreadsheetImportServiceImpl};
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::infrastructure::InMemoryRepo;

/// One list screen: its entity store, the inline create form and the search box.
#[derive(TypedBuilder)]
pub struct ListScreen<T: Record> {
    manager: Arc<dyn ListManagerService<T>>,
    importer: Arc<dyn SpreadsheetImportService<T>>,
    #[builder(default)]
    form: FormSession<T::Draft>,
    #[builder(default, setter(into))]
    query: String,
}

impl<T: Record> ListScreen<T> {
    /// Screen over a fresh in-memory store.
    pub fn in_memory(delimiter: u8) -> Self {
        let manager: Arc<dyn ListManagerService<T>> = Arc::new(
            ListManagerImpl::builder()
                .repo(Arc::new(InMemoryRepo::<T>::new()))
                .build(),
        );
        let importer = Arc::new(
            SpreadsheetImportServiceImpl::builder()
                .list_manager(manager.clone())
                .delimiter(delimiter)
                .build(),
        );
        Self::builder().manager(manager).importer(importer).build()
    }

    pub fn manager(&self) -> Arc<dyn ListManagerService<T>> {
        self.manager.clone()
    }

    pub fn form(&self) -> &FormSession<T::Draft> {
        &self.form
    }

    pub fn is_form_visible(&self) -> bool {
        self.form.is_visible()
    }

    pub fn open_form(&mut self) -> CampusResult<()> {
        self.form.open()
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut T::Draft)) -> CampusResult<()> {
        self.form.edit(f)
    }

    /// Store the draft and close the form. The form closes on failure too.
    pub async fn submit(&mut self) -> CampusResult<T> {
        let draft = self.form.begin_submit()?;
        match self.manager.submit(draft).await {
            Ok(record) => {
                self.form.finish_submit()?;
                tracing::info!(kind = T::KIND, id = %record.id(), "Record added.");
                Ok(record)
            }
            Err(e) => {
                self.form.cancel();
                tracing::error!(kind = T::KIND, "Cannot add record: {e}");
                Err(e)
            }
        }
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records matching the current search text.
    pub async fn visible(&self) -> CampusResult<Vec<T>> {
        self.manager.filter(&self.query).await
    }

    /// Import the picked spreadsheet, returning how many records were added.
    ///
    /// Failures are logged and count as zero.
    pub async fn import_spreadsheet(&self, picker: &dyn DocumentPicker) -> usize {
        let source = match picker.pick_spreadsheet().await {
            Ok(Some(source)) => source,
            Ok(None) => {
                tracing::debug!(kind = T::KIND, "Import cancelled.");
                return 0;
            }
            Err(e) => {
                tracing::error!(kind = T::KIND, "Cannot pick spreadsheet: {e}");
                return 0;
            }
        };
        match self.importer.import(source).await {
            Ok(records) => records.len(),
            Err(e) => {
                tracing::error!(kind = T::KIND, "Cannot import spreadsheet: {e}");
                0
            }
        }
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: impl FnOnce(&mut T) + Send + 'static,
    ) -> CampusResult<T> {
        self.manager
            .update(
                id,
                Box::new(move |record: &mut T| {
                    patch(record);
                    Ok(())
                }),
            )
            .await
    }

    pub async fn remove(&self, id: Uuid) -> CampusResult<T> {
        self.manager.remove(id).await
    }
}
