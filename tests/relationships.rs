// Integration tests for the object-relationship demos

use oop_demos::DemoError;
use oop_demos::Interpreter;
use oop_demos::car::Car;
use oop_demos::list::{BoundedList, MAX_SIZE, reverse};
use oop_demos::player::{Gun, Player};
use oop_demos::student::{Person, PersonLike, Student};

#[test]
fn test_list_capacity_is_enforced() {
    let mut list: BoundedList = BoundedList::new();
    for i in 0..MAX_SIZE as i32 {
        list.add(i * 2).expect("add within capacity");
    }
    assert!(list.is_full());
    assert_eq!(
        list.add(99),
        Err(DemoError::Full {
            capacity: MAX_SIZE
        })
    );
    assert_eq!(list.size(), MAX_SIZE);
    assert_eq!(list.get(MAX_SIZE - 1), Ok(18));
}

#[test]
fn test_reverse_walkthrough() {
    let mut list1: BoundedList = BoundedList::new();
    let mut list2: BoundedList = BoundedList::new();
    for v in [4, 6, 1, 5] {
        list1.add(v).unwrap();
    }
    list2.add(9).unwrap();

    reverse(&list1, &mut list2).unwrap();

    assert_eq!(list1.to_string(), "[4 6 1 5 ]");
    assert_eq!(list2.to_string(), "[5 1 6 4 ]");
}

#[test]
fn test_reverse_between_capacities() {
    let mut small: BoundedList<4> = BoundedList::new();
    let mut large: BoundedList<16> = BoundedList::new();
    for v in [1, 2, 3, 4] {
        small.add(v).unwrap();
    }
    reverse(&small, &mut large).unwrap();
    assert_eq!(large.iter().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
}

#[test]
fn test_car_lifecycle() {
    let mut car = Car::new();
    assert_eq!(car.engine_temperature(), 15.0);
    car.start();
    assert_eq!(car.engine_temperature(), 75.0);
    car.stop();
    assert_eq!(car.engine_temperature(), 15.0);
    drop(car);
}

#[test]
fn test_gun_outlives_players() {
    let gun = Gun::new("Colt");
    {
        let mut player = Player::new("Billy");
        assert!(matches!(
            player.shoot(),
            Err(DemoError::MissingDependency { .. })
        ));
        player.pickup_gun(&gun);
        player.shoot().unwrap();
        player.drop_gun();
        assert!(player.shoot().is_err());
    }
    assert_eq!(gun.shots_fired(), 1);
    assert_eq!(gun.name(), "Colt");
}

#[test]
fn test_student_person_access() {
    let student = Student::new(Person::new("Grace", "Hopper", 1906), "S-42");
    assert_eq!(student.person().last_name(), "Hopper");
    assert_eq!(student.full_name(), "Grace Hopper");
}

#[test]
fn test_interpreter_session() {
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    for line in ["add 4 6 1 5", "sort", "reverse", "get 0"] {
        assert_eq!(interp.execute_line(line, &mut out).unwrap(), 0);
    }
    let s = String::from_utf8(out).unwrap();
    assert_eq!(s, "[1 4 5 6 ]\n[1 4 5 6 ]\n[6 5 4 1 ]\n6\n");
}

#[test]
fn test_interpreter_layout() {
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    interp.execute_line("layout", &mut out).unwrap();
    let s = String::from_utf8(out).unwrap();
    assert!(s.contains("AlignedSample: size 6 bytes"));
    assert!(s.contains("PackedSample: size 5 bytes"));
}

#[test]
fn test_interpreter_help_exits_zero() {
    let mut interp = Interpreter::default();
    let mut out = Vec::new();
    assert_eq!(interp.execute_line("drive --help", &mut out).unwrap(), 0);
    assert!(String::from_utf8(out).unwrap().contains("--fuel"));
}
