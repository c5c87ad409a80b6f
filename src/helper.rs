use std::io::BufRead;

use crate::domain::Contact;
use crate::errors::AppError;

pub const DELIMITER: char = ',';

/// Writes one `first,last,phone,email` line per contact.
///
/// Fields are not quoted: a delimiter inside a value shifts the remaining
/// fields of that line when it is read back.
pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        let ser_contact = format!(
            "{first}{d}{last}{d}{phone}{d}{email}\n",
            first = contact.first_name,
            last = contact.last_name,
            phone = contact.phone,
            email = contact.email,
            d = DELIMITER,
        );

        data.push_str(&ser_contact);
    }
    data
}

/// Parses a single record. Missing trailing fields become empty strings and
/// anything after the fourth field is ignored.
pub fn deserialize_contact_line(line: &str) -> Contact {
    let mut parts = line.split(DELIMITER);
    let mut next = || parts.next().unwrap_or_default().to_string();

    Contact::new(next(), next(), next(), next()).truncated()
}

/// Reads every non-blank record from `buffer`.
///
/// Exactly one trailing `\n` is stripped from each record; invalid UTF-8 is
/// the only structural failure.
pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    for line in buffer.split(b'\n') {
        let line = String::from_utf8(line?)?;

        if line.is_empty() {
            continue;
        }

        contacts.push(deserialize_contact_line(&line));
    }

    Ok(contacts)
}
