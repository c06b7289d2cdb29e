use scope_reset::{Scope, session_ns};

#[test]
fn session() {
    let mut ns = session_ns().lock();
    ns.insert("x", 1);
    ns.insert("y", 2);

    {
        let mut scope = ns.scope();
        scope.insert("x", 10);
        scope.insert("tmp", "scratch");
    }
    assert_eq!(ns.get::<i32>("x"), Some(&1));
    assert!(!ns.contains("tmp"));

    Scope::new()
        .except(["result"])
        .run(&mut ns, |ns| {
            let sum = ns.get::<i32>("x").unwrap() + ns.get::<i32>("y").unwrap();
            ns.insert("y", 20);
            ns.insert("result", sum);
        })
        .unwrap();
    assert_eq!(ns.get::<i32>("y"), Some(&2));
    assert_eq!(ns.get::<i32>("result"), Some(&3));
    drop(ns);

    assert_eq!(session_ns().lock().get::<i32>("result"), Some(&3));
}
