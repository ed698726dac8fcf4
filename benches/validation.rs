//! Benchmarks for form validation.
//!
//! These benchmarks measure rule evaluation for a registration-sized form.

use auth_tui::form::{FieldRules, Form, Validations};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

fn registration_form(email: &str) -> Form<&'static str> {
    let validations = Validations::new()
        .field("first_name", FieldRules::new().required("required"))
        .field("last_name", FieldRules::new().required("required"))
        .field(
            "email",
            FieldRules::new()
                .required("required")
                .pattern(EMAIL_PATTERN, "invalid email")
                .unwrap(),
        )
        .field(
            "password",
            FieldRules::new()
                .required("required")
                .custom(|value: &String| value.len() >= 8, "too short"),
        );
    Form::new([
        ("first_name", "Ada".to_string()),
        ("last_name", "Lovelace".to_string()),
        ("email", email.to_string()),
        ("password", "analytical".to_string()),
    ])
    .with_validations(validations)
}

fn bench_validate_valid(c: &mut Criterion) {
    let form = registration_form("ada@example.com");
    c.bench_function("validate_valid_registration", |b| {
        b.iter(|| black_box(form.validate()))
    });
}

fn bench_validate_invalid(c: &mut Criterion) {
    let form = registration_form("ada.example.com");
    c.bench_function("validate_invalid_registration", |b| {
        b.iter(|| black_box(form.validate()))
    });
}

fn bench_pattern_compile(c: &mut Criterion) {
    c.bench_function("pattern_rule_compile", |b| {
        b.iter(|| FieldRules::<String>::new().pattern(black_box(EMAIL_PATTERN), "invalid email"))
    });
}

criterion_group!(
    benches,
    bench_validate_valid,
    bench_validate_invalid,
    bench_pattern_compile
);
criterion_main!(benches);
