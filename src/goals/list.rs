//! Relations over lists built from pairs.

use crate::core::value::Value;
use crate::goals::primitive::eq;
use crate::{conde, defrel, fresh};

defrel! {
    /// `out` is the pair of `first` and `rest`.
    pub conso(first, rest, out) {
        eq(Value::cons(first, rest), out)
    }
}

defrel! {
    /// `first` is the head of the list `out`.
    pub firsto(first, out) {
        fresh!{ (rest),
            conso(&first, rest, &out)
        }
    }
}

defrel! {
    /// `rest` is the tail of the list `out`.
    pub resto(rest, out) {
        fresh!{ (first),
            conso(first, &rest, &out)
        }
    }
}

defrel! {
    pub emptyo(l) {
        eq((), l)
    }
}

defrel! {
    /// `out` is `seq1` followed by `seq2`.
    pub appendo(seq1, seq2, out) {
        conde!{
            emptyo(seq1.clone()), eq(seq2.clone(), out.clone());
            fresh!{ (first, rest, rec),
                conso(first, rest, &seq1),
                conso(first, rec, &out),
                appendo(rest, &seq2, rec),
            };
        }
    }
}

defrel! {
    /// `x` is an item of the list `l`.
    pub membero(x, l) {
        conde!{
            firsto(&x, &l);
            fresh!{ (rest),
                resto(rest, &l),
                membero(&x, rest),
            };
        }
    }
}

defrel! {
    /// `a` and `b` are lists of equal length.
    pub same_lengtho(a, b) {
        conde!{
            emptyo(a.clone()), emptyo(b.clone());
            fresh!{ (x, xs, y, ys),
                conso(x, xs, &a),
                conso(y, ys, &b),
                same_lengtho(xs, ys),
            };
        }
    }
}

defrel! {
    /// `r` holds the items of `l` in reverse order.
    ///
    /// Terminates as long as either side is a list of known length.
    pub reverseo(l, r) {
        same_lengtho(&l, &r),
        reverse_acco(l, (), r)
    }
}

defrel! {
    reverse_acco(l, acc, out) {
        conde!{
            emptyo(l.clone()), eq(acc.clone(), out.clone());
            fresh!{ (head, tail),
                conso(head, tail, &l),
                reverse_acco(tail, Value::cons(head, &acc), &out),
            };
        }
    }
}
