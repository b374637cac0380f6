use std::io::Cursor;

use async_trait::async_trait;
use calamine::Reader;
use domain_campus::{
    command::SpreadsheetSource,
    exception::{CampusException, CampusResult},
    model::vo::Record,
    service::{ListManagerService, SpreadsheetImportService},
};
use std::sync::Arc;
use typed_builder::TypedBuilder;

/// Zip container of xlsx/xlsb/ods files.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
/// Compound document of legacy xls files.
const CFB_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0];

/// Imports workbooks (first sheet) and delimited text, both with a header row.
#[derive(TypedBuilder)]
pub struct SpreadsheetImportServiceImpl<T: Record> {
    list_manager: Arc<dyn ListManagerService<T>>,
    #[builder(default = b',')]
    delimiter: u8,
}

fn malformed_row(line: u64, e: csv::Error) -> CampusException {
    CampusException::MalformedRow {
        line: e.position().map(|p| p.line()).unwrap_or(line),
        reason: e.to_string(),
    }
}

impl<T: Record> SpreadsheetImportServiceImpl<T> {
    fn parse(&self, content: Vec<u8>) -> CampusResult<Vec<T::Draft>> {
        if content.starts_with(ZIP_MAGIC) || content.starts_with(CFB_MAGIC) {
            Self::parse_workbook(content)
        } else {
            self.parse_delimited(&content)
        }
    }

    /// Every row as a draft, headers matched against the draft's field names.
    fn parse_delimited(&self, content: &[u8]) -> CampusResult<Vec<T::Draft>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(content);
        reader
            .deserialize::<T::Draft>()
            .map(|row| row.map_err(|e| malformed_row(0, e)))
            .collect()
    }

    /// Rows of the first sheet, read as text the same way delimited rows are.
    fn parse_workbook(content: Vec<u8>) -> CampusResult<Vec<T::Draft>> {
        let unreadable = |e: calamine::Error| CampusException::MalformedWorkbook {
            reason: e.to_string(),
        };
        let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(content))
            .map_err(unreadable)?;
        let sheet = workbook
            .worksheet_range_at(0)
            .ok_or(CampusException::MalformedWorkbook {
                reason: "the workbook has no sheet".to_string(),
            })?
            .map_err(unreadable)?;
        let first_line = sheet.start().map(|(row, _)| u64::from(row) + 1).unwrap_or(1);
        let mut rows = sheet
            .rows()
            .map(|cells| csv::StringRecord::from(cells.iter().map(|c| c.to_string()).collect::<Vec<_>>()));
        let Some(mut headers) = rows.next() else {
            return Ok(vec![]);
        };
        headers.trim();
        rows.zip(first_line + 1..)
            .map(|(row, line)| {
                row.deserialize::<T::Draft>(Some(&headers))
                    .map_err(|e| malformed_row(line, e))
            })
            .collect()
    }

    async fn read(source: SpreadsheetSource) -> CampusResult<Vec<u8>> {
        match source {
            SpreadsheetSource::Path(path) => tokio::fs::read(&path)
                .await
                .map_err(|source| CampusException::SpreadsheetUnreadable { source }),
            SpreadsheetSource::Bytes(bytes) => Ok(bytes),
        }
    }
}

#[async_trait]
impl<T: Record> SpreadsheetImportService<T> for SpreadsheetImportServiceImpl<T> {
    async fn import(&self, source: SpreadsheetSource) -> CampusResult<Vec<T>> {
        let content = Self::read(source).await?;
        let drafts = self.parse(content)?;
        let records = self.list_manager.append_all(drafts).await?;
        tracing::info!(kind = T::KIND, count = records.len(), "Spreadsheet imported.");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain_campus::{
        mock::{MockComplaintListManager, MockFacilityListManager, MockStudentListManager},
        model::{
            entity::{Complaint, ComplaintDraft, Facility, FacilityDraft, Student, StudentDraft},
            vo::Derived,
        },
    };
    use indoc::indoc;

    use super::*;

    fn appended(drafts: Vec<StudentDraft>) -> CampusResult<Vec<Student>> {
        Ok(drafts
            .into_iter()
            .map(|draft| Student::from_draft(draft, Derived::new(Utc::now())))
            .collect())
    }

    fn complaints(drafts: Vec<ComplaintDraft>) -> CampusResult<Vec<Complaint>> {
        Ok(drafts
            .into_iter()
            .map(|draft| Complaint::from_draft(draft, Derived::new(Utc::now())))
            .collect())
    }

    fn workbook(rows: &[&[&str]]) -> Vec<u8> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell.parse::<f64>() {
                    Ok(number) => sheet.write_number(row as u32, col as u16, number),
                    Err(_) => sheet.write_string(row as u32, col as u16, *cell),
                }
                .unwrap();
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[tokio::test]
    async fn three_rows_in_order() {
        let mut manager = MockStudentListManager::new();
        manager
            .expect_append_all()
            .times(1)
            .withf(|drafts: &Vec<StudentDraft>| {
                drafts.len() == 3
                    && drafts[0].name == "Asha Rao"
                    && drafts[0].email == "asha@college.edu"
                    && drafts[0].department.is_empty()
                    && drafts[0].roll_number.is_empty()
                    && drafts[2].name == "Chen Li"
            })
            .returning(appended);
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = indoc! {"
            name, email
            Asha Rao,asha@college.edu
            Ben Okafor,ben@college.edu
            Chen Li,chen@college.edu
        "};
        let students = service
            .import(SpreadsheetSource::Bytes(content.as_bytes().to_vec()))
            .await
            .unwrap();
        let names: Vec<_> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Asha Rao", "Ben Okafor", "Chen Li"]);
    }

    #[tokio::test]
    async fn unknown_columns_and_short_rows() {
        let mut manager = MockStudentListManager::new();
        manager
            .expect_append_all()
            .withf(|drafts: &Vec<StudentDraft>| {
                drafts.len() == 2
                    && drafts[0].roll_number == "CS-1"
                    && drafts[1].name == "Ben"
                    && drafts[1].roll_number.is_empty()
            })
            .returning(appended);
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = indoc! {"
            name,hobby,rollNumber
            Asha,chess,CS-1
            Ben
        "};
        assert_eq!(
            service.import(SpreadsheetSource::Bytes(content.into())).await.unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn semicolon_delimiter() {
        let mut manager = MockStudentListManager::new();
        manager
            .expect_append_all()
            .withf(|drafts: &Vec<StudentDraft>| drafts[0].department == "Physics, Applied")
            .returning(appended);
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .delimiter(b';')
            .build();

        let content = "name;department\nAsha;Physics, Applied\n";
        assert!(service.import(SpreadsheetSource::Bytes(content.into())).await.is_ok());
    }

    #[tokio::test]
    async fn malformed_row_appends_nothing() {
        let mut manager = MockComplaintListManager::new();
        manager.expect_append_all().never();
        let service = SpreadsheetImportServiceImpl::<Complaint>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = indoc! {"
            title,description,isAnonymous
            Broken fan,Room 12,true
            Cold water,Hostel B,maybe
        "};
        let result = service.import(SpreadsheetSource::Bytes(content.into())).await;
        assert!(matches!(result, Err(CampusException::MalformedRow { line: 3, .. })));
    }

    #[tokio::test]
    async fn reads_path() {
        let path = std::env::temp_dir().join(format!("students-{}.csv", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "name,email\nAsha,asha@college.edu\n").await.unwrap();
        let mut manager = MockStudentListManager::new();
        manager
            .expect_append_all()
            .withf(|drafts: &Vec<StudentDraft>| drafts.len() == 1)
            .returning(appended);
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let students = service.import(SpreadsheetSource::Path(path.clone())).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(students[0].email, "asha@college.edu");
    }

    #[tokio::test]
    async fn missing_file() {
        let mut manager = MockStudentListManager::new();
        manager.expect_append_all().never();
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let result = service
            .import(SpreadsheetSource::Path("/nonexistent/students.csv".into()))
            .await;
        assert!(matches!(result, Err(CampusException::SpreadsheetUnreadable { .. })));
    }

    #[tokio::test]
    async fn blank_flag_cell_is_false() {
        let mut manager = MockComplaintListManager::new();
        manager
            .expect_append_all()
            .times(1)
            .withf(|drafts: &Vec<ComplaintDraft>| {
                drafts.len() == 2 && !drafts[0].is_anonymous && drafts[1].is_anonymous
            })
            .returning(complaints);
        let service = SpreadsheetImportServiceImpl::<Complaint>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = indoc! {"
            title,description,isAnonymous
            Broken fan,Room 12,
            Cold water,Hostel B,true
        "};
        let imported = service.import(SpreadsheetSource::Bytes(content.into())).await.unwrap();
        assert_eq!(imported.len(), 2);
    }

    #[tokio::test]
    async fn first_sheet_of_workbook() {
        let mut manager = MockStudentListManager::new();
        manager
            .expect_append_all()
            .times(1)
            .withf(|drafts: &Vec<StudentDraft>| {
                drafts.len() == 3
                    && drafts[0].name == "Asha Rao"
                    && drafts[1].email == "ben@college.edu"
                    && drafts[2].name == "Chen Li"
                    && drafts[2].department.is_empty()
            })
            .returning(appended);
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = workbook(&[
            &[" name ", "email"],
            &["Asha Rao", "asha@college.edu"],
            &["Ben Okafor", "ben@college.edu"],
            &["Chen Li", "chen@college.edu"],
        ]);
        let students = service.import(SpreadsheetSource::Bytes(content)).await.unwrap();
        assert_eq!(students.len(), 3);
    }

    #[tokio::test]
    async fn number_cells_read_as_written() {
        let mut manager = MockFacilityListManager::new();
        manager
            .expect_append_all()
            .withf(|drafts: &Vec<FacilityDraft>| drafts[0].capacity == "500")
            .returning(|drafts| {
                Ok(drafts
                    .into_iter()
                    .map(|draft| Facility::from_draft(draft, Derived::new(Utc::now())))
                    .collect())
            });
        let service = SpreadsheetImportServiceImpl::<Facility>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = workbook(&[&["name", "type", "capacity"], &["Main Hall", "hall", "500"]]);
        let facilities = service.import(SpreadsheetSource::Bytes(content)).await.unwrap();
        assert_eq!(facilities[0].capacity, 500);
    }

    #[tokio::test]
    async fn malformed_workbook_row_appends_nothing() {
        let mut manager = MockComplaintListManager::new();
        manager.expect_append_all().never();
        let service = SpreadsheetImportServiceImpl::<Complaint>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = workbook(&[
            &["title", "description", "isAnonymous"],
            &["Broken fan", "Room 12", "true"],
            &["Cold water", "Hostel B", "maybe"],
        ]);
        let result = service.import(SpreadsheetSource::Bytes(content)).await;
        assert!(matches!(result, Err(CampusException::MalformedRow { line: 3, .. })));
    }

    #[tokio::test]
    async fn corrupt_workbook() {
        let mut manager = MockStudentListManager::new();
        manager.expect_append_all().never();
        let service = SpreadsheetImportServiceImpl::<Student>::builder()
            .list_manager(Arc::new(manager))
            .build();

        let content = b"PK\x03\x04not really a zip".to_vec();
        let result = service.import(SpreadsheetSource::Bytes(content)).await;
        assert!(matches!(result, Err(CampusException::MalformedWorkbook { .. })));
    }
}
