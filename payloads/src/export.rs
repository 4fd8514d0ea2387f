use crate::Lead;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use jiff::civil::Date;

pub const LEAD_CSV_HEADER: [&str; 11] = [
    "Lead ID",
    "Name",
    "Email",
    "Phone",
    "Enquired For",
    "Space Type",
    "Seats",
    "Location",
    "Message",
    "Date",
    "Status",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render leads as CSV with every field quoted.
pub fn leads_csv(leads: &[Lead]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(LEAD_CSV_HEADER)?;
    for lead in leads {
        writer.write_record([
            lead.lead_id.as_str(),
            &lead.name,
            &lead.email,
            &lead.phone,
            &lead.enquired_for,
            &lead.space_type,
            &lead.number_of_seats.to_string(),
            &lead.location,
            lead.message.as_deref().unwrap_or_default(),
            &lead.date.strftime("%Y-%m-%d").to_string(),
            lead.status.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// `leads-YYYY-MM-DD.csv`
pub fn export_filename(date: Date) -> String {
    format!("leads-{}.csv", date.strftime("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LeadId, LeadStatus};

    fn lead(name: &str, message: Option<&str>) -> Lead {
        Lead {
            id: LeadId::from("l1"),
            lead_id: "LD-1".into(),
            name: name.into(),
            email: "a@b.com".into(),
            phone: "9876543210".into(),
            enquired_for: "WorkHub Kochi".into(),
            space_type: "Hot Desk".into(),
            number_of_seats: 4,
            location: "Kochi".into(),
            message: message.map(Into::into),
            date: "2025-10-28T09:30:00Z".parse().unwrap(),
            status: LeadStatus::New,
        }
    }

    #[test]
    fn header_then_quoted_rows() {
        let csv = leads_csv(&[lead("Asha", Some("Need parking"))]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(
                r#""Lead ID","Name","Email","Phone","Enquired For","Space Type","Seats","Location","Message","Date","Status""#
            )
        );
        assert_eq!(
            lines.next(),
            Some(
                r#""LD-1","Asha","a@b.com","9876543210","WorkHub Kochi","Hot Desk","4","Kochi","Need parking","2025-10-28","new""#
            )
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let csv = leads_csv(&[lead(r#"A "B""#, None)]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.starts_with(r#""LD-1","A ""B""","a@b.com""#));
        assert!(row.contains(r#""Kochi","","2025-10-28""#));
    }

    #[test]
    fn commas_and_newlines_stay_inside_one_field() {
        let csv = leads_csv(&[lead("Ravi", Some("Two rooms,\nmaybe three"))])
            .unwrap();
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][8], "Two rooms,\nmaybe three");
    }

    #[test]
    fn empty_export_is_just_the_header() {
        let csv = leads_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn filename_is_date_stamped() {
        let date = Date::new(2025, 3, 7).unwrap();
        assert_eq!(export_filename(date), "leads-2025-03-07.csv");
    }
}
