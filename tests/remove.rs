use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn removing_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let data = dir.path().join("contacts.txt");
    fs::write(
        &data,
        "Patricia,Moss,08066809241,lmartinez@bender-patterson.net\n\
         Diane,Hale,08064879199,grahammatthew@gmail.com\n\
         John,Ward,08046516806,wendy59@turner.com\n\
         Diane,Cole,08062866694,jackie73@lopez.com\n",
    )?;

    // Attempt to remove a non existing contact
    Command::cargo_bin("phonebook")?
        .arg("--file")
        .arg(&data)
        .write_stdin("2\nAlice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 'Alice' Not found"));

    // Decline the confirmation
    Command::cargo_bin("phonebook")?
        .arg("--file")
        .arg(&data)
        .write_stdin("2\nJohn\nn\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found contact: John Ward | 08046516806 | wendy59@turner.com",
        ))
        .stdout(predicate::str::contains("Deletion canceled."));

    assert_eq!(fs::read_to_string(&data)?.lines().count(), 4);

    // A first name removes the first match in order; a phone works too
    Command::cargo_bin("phonebook")?
        .arg("--file")
        .arg(&data)
        .write_stdin("2\nDiane\ny\n2\n08046516806\nY\n5\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found contact: Diane Hale"))
        .stdout(predicate::str::contains("Found contact: John Ward"))
        .stdout(predicate::str::contains("Contact deleted."));

    assert_eq!(
        fs::read_to_string(&data)?,
        "Patricia,Moss,08066809241,lmartinez@bender-patterson.net\n\
         Diane,Cole,08062866694,jackie73@lopez.com\n"
    );

    Ok(())
}
