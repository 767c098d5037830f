use bna::{
    error::RuntimeError,
    interpreter::{
        memory::{ARGUMENT, Memory, NULL, RESULT, RETURN},
        value::core::Value,
    },
};

fn list(values: &[i64]) -> Value {
    Value::List(values.iter().copied().map(Value::Integer).collect())
}

#[test]
fn fresh_scopes_hold_the_special_variables() {
    let mut memory = Memory::new();
    assert_eq!(memory.get_name(RESULT).unwrap(), Value::Integer(0));
    assert_eq!(memory.get_name(ARGUMENT).unwrap(), Value::Null);
    assert_eq!(memory.get_name(RETURN).unwrap(), Value::Null);
    assert_eq!(memory.get_name(NULL).unwrap(), Value::Null);

    memory.open_scope();
    assert_eq!(memory.depth(), 2);
    assert_eq!(memory.get_name(RESULT).unwrap(), Value::Integer(0));
}

#[test]
fn unknown_variables_read_as_null() {
    let memory = Memory::new();
    assert_eq!(memory.get_name("missing").unwrap(), Value::Null);
}

#[test]
fn names_are_case_insensitive() {
    let mut memory = Memory::new();
    memory.set_name("Total", Value::Integer(3), true).unwrap();
    assert_eq!(memory.get_name("TOTAL").unwrap(), Value::Integer(3));
}

#[test]
fn updates_require_an_existing_variable() {
    let mut memory = Memory::new();
    assert!(matches!(memory.set_name("x", Value::Integer(1), false),
                     Err(RuntimeError::NonExistentVariable { .. })));

    memory.set_name("x", Value::Integer(1), true).unwrap();
    memory.set_name("x", Value::Integer(2), false).unwrap();
    assert_eq!(memory.get_name("x").unwrap(), Value::Integer(2));
}

#[test]
fn indexed_access_resolves_the_last_accessor_first() {
    let mut memory = Memory::new();
    memory.set_name("grid", Value::List(vec![list(&[1, 2]), list(&[3, 4])]), true)
          .unwrap();
    memory.set_name("row", Value::Integer(1), true).unwrap();

    assert_eq!(memory.get_name("grid@row@0").unwrap(), Value::Integer(3));

    memory.set_name("grid@0@row", Value::from("x"), false).unwrap();
    assert_eq!(memory.get_name("grid@0").unwrap().to_string(), "( 1, x )");
}

#[test]
fn bad_indices_are_reported() {
    let mut memory = Memory::new();
    memory.set_name("l", list(&[1]), true).unwrap();
    memory.set_name("word", Value::from("one"), true).unwrap();

    assert!(matches!(memory.get_name("l@1"), Err(RuntimeError::ValueOutOfRange { .. })));
    assert!(matches!(memory.get_name("l@word"), Err(RuntimeError::InvalidIndex { .. })));
    assert!(matches!(memory.get_name("l@99999999999999999999"),
                     Err(RuntimeError::InvalidIndex { .. })));
    assert!(matches!(memory.set_name("missing@0", Value::Null, true),
                     Err(RuntimeError::NonExistentVariable { .. })));
    assert!(matches!(memory.set_name("word@0", Value::from("t"), true),
                     Err(RuntimeError::NotImplemented { .. })));
}

#[test]
fn scopes_only_pass_argument_and_return() {
    let mut memory = Memory::new();
    memory.set_name("outer", Value::Integer(1), true).unwrap();
    memory.set_name(ARGUMENT, list(&[1, 2]), false).unwrap();

    memory.open_scope();
    assert_eq!(memory.get_name("outer").unwrap(), Value::Null);
    assert_eq!(memory.get_name(ARGUMENT).unwrap(), list(&[1, 2]));

    memory.set_name("inner", Value::Integer(5), true).unwrap();
    memory.set_name(RETURN, Value::from("done"), false).unwrap();
    memory.close_scope().unwrap();

    assert_eq!(memory.depth(), 1);
    assert_eq!(memory.get_name("inner").unwrap(), Value::Null);
    assert_eq!(memory.get_name("outer").unwrap(), Value::Integer(1));
    assert_eq!(memory.get_name(RETURN).unwrap(), Value::from("done"));
}

#[test]
fn labels_live_in_the_root_scope() {
    let mut memory = Memory::new();
    memory.open_scope();
    memory.bind_label("Start", 4);
    assert_eq!(memory.get_name("start").unwrap(), Value::Null);

    memory.close_scope().unwrap();
    assert_eq!(memory.get_name("start").unwrap(), Value::Integer(4));
}

#[test]
fn the_root_scope_cannot_be_closed() {
    let mut memory = Memory::new();
    assert!(matches!(memory.close_scope(), Err(RuntimeError::CloseFinalScope)));
    assert_eq!(memory.close_all_files(), 0);
}
