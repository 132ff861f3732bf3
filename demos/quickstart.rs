use zeitgeist::{SymbolicTime, Time, TimeInstant};

fn main() {
    let start = SymbolicTime::of(0);
    let now: Time = (start + 12).into();
    let horizon = Time::INFINITY;

    println!("start: {start}");
    println!("now: {now}");
    println!("horizon: {horizon}");
    println!("now before horizon: {}", now < horizon);
    println!("elapsed: {:?}", now.periods_since(&start.into()));
    println!("horizon + 1: {}", horizon + 1);
    println!("overflow check: {:?}", Time::symbolic(i64::MAX).checked_add(1));
}
