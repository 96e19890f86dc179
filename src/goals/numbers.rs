//! Logic-compatible numbers.
//!
//! The current implementation uses Peano numbers, which is
//! horribly inefficient but very simple. Will serve as a
//! baseline for future more efficient implementations.

use crate::core::goal::Goal;
use crate::core::value::Value;
use crate::goals::primitive::eq;
use crate::{conde, defrel, fresh};

/// Creates a goal that succeeds if n is 0.
pub fn zeroo(n: impl Into<Value>) -> Goal {
    eq(Value::Zero, n)
}

/// Creates a goal that succeeds if n is 1.
pub fn oneo(n: impl Into<Value>) -> Goal {
    eq(Value::nat(1), n)
}

defrel! {
    /// Creates a goal that succeeds if b is one more than a.
    pub inco(a, b) {
        eq(Value::succ(a), b)
    }
}

defrel! {
    /// Creates a goal that succeeds if n is a positive number greater than zero.
    pub poso(n) {
        fresh!{ (x),
            inco(x, &n)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if n is a positive number greater than one.
    pub gt1o(n) {
        fresh!{ (x),
            poso(x),
            inco(x, &n)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if n is a natural number.
    pub numbero(n) {
        conde!{
            zeroo(n.clone());
            fresh!{ (a),
                inco(a, &n),
                numbero(a),
            };
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if a + b equals c
    ///
    /// Terminates when `c` is known, or when both `a` and `b` are.
    pub addo(a, b, c) {
        conde!{
            // 0 + b == b
            zeroo(a.clone()),
            eq(b.clone(), c.clone());

            // (a>0) + b == c  =>  b + (a-1) == (c-1)
            fresh!{ (a0, c0),
                inco(a0, &a),
                inco(c0, &c),
                addo(&b, a0, c0),
            };
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if a * b equals c
    pub mulo(a, b, c) {
        fresh!{ (a0, c0),
            conde!{
                // 0 * b == 0
                zeroo(&a),
                zeroo(&c);

                // (a>0) * 0 == 0
                poso(&a),
                zeroo(&b),
                zeroo(&c);

                // 1 * (b>0) == b
                oneo(&a),
                poso(&b),
                eq(&b, &c);

                // (a>1) * 1 == a
                gt1o(&a),
                oneo(&b),
                eq(&a, &c);

                // (a>1) * (b>1) == c  =>  (a-1) * b == c-b
                gt1o(&a),
                gt1o(&b),
                inco(a0, &a),
                addo(c0, &b, &c),
                mulo(a0, &b, c0);
            }
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if a is greater than or equal to b.
    pub gteo(a, b) {
        fresh!{ (k),
            addo(&b, k, &a)
        }
    }
}

defrel! {
    /// Creates a goal that succeeds if a is less than or equal to b.
    pub lteo(a, b) {
        gteo(b, a)
    }
}
