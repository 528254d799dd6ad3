//! Basic usage example for fieldcheck.

use fieldcheck::Validator;

struct Signup<'a> {
    name: &'a str,
    email: &'a str,
    age: &'a str,
}

fn validate(form: &Signup<'_>) -> Result<(), Validator> {
    let mut v = Validator::new();
    v.required("name", form.name, None);
    v.len("name", form.name, 2, 50, None);
    v.email("email", form.email, None);
    let age = v.integer("age", form.age, None);
    v.range("age", age, 0, 150, None);
    v.into_result()
}

fn main() {
    let good = Signup { name: "Barry", email: "barry@example.com", age: "42" };
    match validate(&good) {
        Ok(()) => println!("signup accepted"),
        Err(errors) => println!("rejected:\n{errors}"),
    }

    let bad = Signup { name: "", email: "not-an-address", age: "12.5" };
    match validate(&bad) {
        Ok(()) => println!("signup accepted"),
        Err(errors) => {
            // Render for humans, or ship the JSON body to the client.
            println!("rejected ({}):\n{}", errors.status_code(), errors);
            println!("{}", errors.to_json());
        }
    }
}
