//! End-to-end scenarios for building and rendering validation errors

use std::error::Error;
use valerr::prelude::*;
use valerr::{assert_has_violation, assert_violations};

#[test]
fn single_violation_describe() {
    let err = ValidationError::new(Violation::new("email", "invalid"));

    assert_eq!(err.describe(), "[ { 'email' : 'invalid' } ]");
    assert_eq!(err.render(), "ValidationError[ { 'email' : 'invalid' } ]");
    assert_eq!(err.violations().len(), 1);
}

#[test]
fn two_violations_render() {
    let err = ValidationError::with_rest(
        Violation::new("email", "invalid"),
        vec![Violation::new("password", "insecure")],
    );

    assert_eq!(
        err.render(),
        "ValidationError[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
    );
    assert_eq!(
        err.describe(),
        "[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
    );
}

#[test]
fn append_to_single_violation() {
    let base = ValidationError::new(Violation::new("email", "invalid"));
    let grown = base.append(Violation::new("name", "empty"));

    assert_eq!(
        grown.describe(),
        "[ { 'email' : 'invalid' }, { 'name' : 'empty' } ]"
    );
    assert_ne!(
        grown.describe(),
        "[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
    );
    assert_eq!(base.describe(), "[ { 'email' : 'invalid' } ]");
}

#[test]
fn three_violations_via_macro() {
    let err = validation_error![
        ("email", "invalid"),
        ("password", "insecure"),
        ("name", "empty"),
    ];

    assert_violations!(
        err,
        [("email", "invalid"), ("password", "insecure"), ("name", "empty")]
    );
}

#[test]
fn append_to_multiple_violations() {
    let err = validation_error![("email", "empty"), ("password", "insecure")]
        .append(Violation::new("name", "empty"));

    assert_eq!(
        err,
        validation_error![("email", "empty"), ("password", "insecure"), ("name", "empty")]
    );
}

#[test]
fn single_violation_has_one_bracketed_pair() {
    let err = ValidationError::new(Violation::new("age", "negative"));

    assert_eq!(err.render().matches("{ ").count(), 1);
    assert_eq!(err.describe().matches(" }").count(), 1);
}

#[test]
fn empty_vec_is_rejected() {
    let result = ValidationError::from_vec(Vec::new());
    assert_eq!(result, Err(InvalidArgument::NoViolations));

    let result: Result<ValidationError, InvalidArgument> =
        vec![Violation::new("email", "invalid")].try_into();
    assert!(result.is_ok());
}

#[test]
fn quotes_in_reason_are_rendered_verbatim() {
    let err = ValidationError::new(Violation::new("bio", "can't be 'blank'"));
    assert_eq!(err.describe(), "[ { 'bio' : 'can't be 'blank'' } ]");
}

#[derive(Debug)]
struct SignupForm {
    email: String,
    password: String,
    name: String,
}

fn validate(form: &SignupForm) -> Result<(), ValidationError> {
    let mut found: Vec<Violation> = Vec::new();
    if !form.email.contains('@') {
        found.push(Violation::new("email", "invalid"));
    }
    if form.password.len() < 8 {
        found.push(Violation::new("password", "insecure"));
    }
    if form.name.is_empty() {
        found.push(Violation::new("name", "empty"));
    }
    match ValidationError::from_vec(found) {
        Ok(err) => Err(err),
        Err(InvalidArgument::NoViolations) => Ok(()),
        Err(other) => panic!("unexpected construction error: {other}"),
    }
}

fn submit(form: &SignupForm) -> Result<String, Box<dyn Error + Send + Sync>> {
    validate(form)?;
    Ok(format!("welcome {}", form.name))
}

#[test]
fn form_errors_surface_as_generic_error() {
    let form = SignupForm {
        email: "nope".to_string(),
        password: "short".to_string(),
        name: "Ada".to_string(),
    };

    let err = submit(&form).unwrap_err();
    assert_eq!(
        err.to_string(),
        "[ { 'email' : 'invalid' }, { 'password' : 'insecure' } ]"
    );

    let typed = err
        .downcast_ref::<ValidationError>()
        .expect("should downcast to ValidationError");
    assert_has_violation!(typed, "password", "insecure");
    assert_eq!(typed.first().field(), "email");
}

#[test]
fn valid_form_passes() {
    let form = SignupForm {
        email: "ada@example.com".to_string(),
        password: "correct horse battery".to_string(),
        name: "Ada".to_string(),
    };

    assert_eq!(submit(&form).unwrap(), "welcome Ada");
}

#[test]
fn shared_across_threads() {
    let err = std::sync::Arc::new(validation_error![("email", "invalid")]);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let err = std::sync::Arc::clone(&err);
            std::thread::spawn(move || err.append(Violation::new(format!("field{i}"), "bad")))
        })
        .collect();

    for handle in handles {
        let grown = handle.join().unwrap();
        assert_eq!(grown.len(), 2);
    }
    assert_eq!(err.len(), 1);
}
