use num_traits::{Float, FromPrimitive, Num, NumCast, One, ParseFloatError, ToPrimitive, Zero};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Forward-mode dual number carrying a value and `N` partial derivatives.
///
/// Comparisons only look at the value, so branch selection inside the laws
/// behaves exactly as with plain floats.
#[derive(Debug, Clone, Copy)]
pub struct Dual<const N: usize> {
    pub val: f64,
    pub eps: [f64; N],
}

impl<const N: usize> Dual<N> {
    pub fn new(val: f64, eps: [f64; N]) -> Self {
        Self { val, eps }
    }

    /// A value with all derivatives zero.
    pub fn constant(val: f64) -> Self {
        Self::new(val, [0.0; N])
    }

    /// The `idx`-th independent variable (unit seed in slot `idx`).
    pub fn variable(val: f64, idx: usize) -> Self {
        let mut eps = [0.0; N];
        eps[idx] = 1.0;
        Self::new(val, eps)
    }

    pub fn value(&self) -> f64 {
        self.val
    }

    pub fn derivative(&self, idx: usize) -> f64 {
        self.eps[idx]
    }

    pub fn derivatives(&self) -> &[f64; N] {
        &self.eps
    }

    /// Applies `f` with derivative `df` (both evaluated at the value).
    fn chain(self, f: f64, df: f64) -> Self {
        Self::new(f, self.eps.map(|e| df * e))
    }

    fn zip(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> [f64; N] {
        let mut out = [0.0; N];
        for (i, o) in out.iter_mut().enumerate() {
            *o = f(self.eps[i], rhs.eps[i]);
        }
        out
    }
}

impl<const N: usize> Default for Dual<N> {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl<const N: usize> From<f64> for Dual<N> {
    fn from(val: f64) -> Self {
        Self::constant(val)
    }
}

impl<const N: usize> PartialEq for Dual<N> {
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<const N: usize> PartialOrd for Dual<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl<const N: usize> Zero for Dual<N> {
    fn zero() -> Self {
        Self::constant(0.0)
    }
    fn is_zero(&self) -> bool {
        self.val == 0.0 && self.eps.iter().all(|e| *e == 0.0)
    }
}

impl<const N: usize> One for Dual<N> {
    fn one() -> Self {
        Self::constant(1.0)
    }
}

impl<const N: usize> Add for Dual<N> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.zip(rhs, |a, b| a + b))
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.zip(rhs, |a, b| a - b))
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (u, v) = (self.val, rhs.val);
        Self::new(u * v, self.zip(rhs, |du, dv| u * dv + du * v))
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let (u, v) = (self.val, rhs.val);
        let denom = v * v;
        Self::new(u / v, self.zip(rhs, |du, dv| (du * v - u * dv) / denom))
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.val, self.eps.map(|e| -e))
    }
}

impl<const N: usize> Rem for Dual<N> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        // a % b = a - b * trunc(a / b); trunc is piecewise constant.
        let q = (self.val / rhs.val).trunc();
        Self::new(self.val % rhs.val, self.zip(rhs, |da, db| da - q * db))
    }
}

impl<const N: usize> AddAssign for Dual<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl<const N: usize> SubAssign for Dual<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl<const N: usize> MulAssign for Dual<N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl<const N: usize> DivAssign for Dual<N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}
impl<const N: usize> RemAssign for Dual<N> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<const N: usize> Num for Dual<N> {
    type FromStrRadixErr = ParseFloatError;
    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        f64::from_str_radix(str, radix).map(Self::constant)
    }
}

impl<const N: usize> ToPrimitive for Dual<N> {
    fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.val.to_u64()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.val)
    }
}

impl<const N: usize> FromPrimitive for Dual<N> {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::constant(n as f64))
    }
    fn from_f64(n: f64) -> Option<Self> {
        Some(Self::constant(n))
    }
}

impl<const N: usize> NumCast for Dual<N> {
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        n.to_f64().map(Self::constant)
    }
}

impl<const N: usize> Float for Dual<N> {
    fn nan() -> Self {
        Self::constant(f64::NAN)
    }
    fn infinity() -> Self {
        Self::constant(f64::INFINITY)
    }
    fn neg_infinity() -> Self {
        Self::constant(f64::NEG_INFINITY)
    }
    fn neg_zero() -> Self {
        Self::constant(-0.0)
    }
    fn min_value() -> Self {
        Self::constant(f64::MIN)
    }
    fn min_positive_value() -> Self {
        Self::constant(f64::MIN_POSITIVE)
    }
    fn max_value() -> Self {
        Self::constant(f64::MAX)
    }
    fn is_nan(self) -> bool {
        self.val.is_nan()
    }
    fn is_infinite(self) -> bool {
        self.val.is_infinite()
    }
    fn is_finite(self) -> bool {
        self.val.is_finite()
    }
    fn is_normal(self) -> bool {
        self.val.is_normal()
    }
    fn classify(self) -> std::num::FpCategory {
        self.val.classify()
    }
    fn floor(self) -> Self {
        Self::constant(self.val.floor())
    }
    fn ceil(self) -> Self {
        Self::constant(self.val.ceil())
    }
    fn round(self) -> Self {
        Self::constant(self.val.round())
    }
    fn trunc(self) -> Self {
        Self::constant(self.val.trunc())
    }
    fn fract(self) -> Self {
        self.chain(self.val.fract(), 1.0)
    }
    fn abs(self) -> Self {
        if self.val < 0.0 {
            -self
        } else {
            self
        }
    }
    fn signum(self) -> Self {
        Self::constant(self.val.signum())
    }
    fn is_sign_positive(self) -> bool {
        self.val.is_sign_positive()
    }
    fn is_sign_negative(self) -> bool {
        self.val.is_sign_negative()
    }
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }
    fn recip(self) -> Self {
        self.chain(1.0 / self.val, -1.0 / (self.val * self.val))
    }

    fn powi(self, n: i32) -> Self {
        if n == 0 {
            return Self::one();
        }
        let df = n as f64 * self.val.powi(n - 1);
        self.chain(self.val.powi(n), df)
    }

    fn powf(self, n: Self) -> Self {
        let f = self.val.powf(n.val);
        // The ln(x) term only enters where the exponent itself varies, which
        // keeps x = 0 finite for constant exponents >= 1.
        let d_base = if self.eps.iter().all(|e| *e == 0.0) {
            0.0
        } else {
            n.val * self.val.powf(n.val - 1.0)
        };
        let d_exp = if n.eps.iter().all(|e| *e == 0.0) {
            0.0
        } else {
            f * self.val.ln()
        };
        Self::new(f, self.zip(n, |dx, dn| d_base * dx + d_exp * dn))
    }

    fn sqrt(self) -> Self {
        let s = self.val.sqrt();
        self.chain(s, 0.5 / s)
    }
    fn exp(self) -> Self {
        let e = self.val.exp();
        self.chain(e, e)
    }
    fn exp2(self) -> Self {
        let e = self.val.exp2();
        self.chain(e, e * std::f64::consts::LN_2)
    }
    fn ln(self) -> Self {
        self.chain(self.val.ln(), 1.0 / self.val)
    }
    fn log(self, base: Self) -> Self {
        self.ln() / base.ln()
    }
    fn log2(self) -> Self {
        self.chain(self.val.log2(), 1.0 / (self.val * std::f64::consts::LN_2))
    }
    fn log10(self) -> Self {
        self.chain(self.val.log10(), 1.0 / (self.val * std::f64::consts::LN_10))
    }

    fn max(self, other: Self) -> Self {
        if self.val >= other.val || other.val.is_nan() {
            self
        } else {
            other
        }
    }
    fn min(self, other: Self) -> Self {
        if self.val <= other.val || other.val.is_nan() {
            self
        } else {
            other
        }
    }

    #[allow(deprecated)]
    fn abs_sub(self, other: Self) -> Self {
        if self.val <= other.val {
            Self::zero()
        } else {
            self - other
        }
    }

    fn cbrt(self) -> Self {
        let c = self.val.cbrt();
        self.chain(c, 1.0 / (3.0 * c * c))
    }
    fn hypot(self, other: Self) -> Self {
        (self * self + other * other).sqrt()
    }

    fn sin(self) -> Self {
        self.chain(self.val.sin(), self.val.cos())
    }
    fn cos(self) -> Self {
        self.chain(self.val.cos(), -self.val.sin())
    }
    fn tan(self) -> Self {
        let t = self.val.tan();
        self.chain(t, 1.0 + t * t)
    }
    fn asin(self) -> Self {
        self.chain(self.val.asin(), 1.0 / (1.0 - self.val * self.val).sqrt())
    }
    fn acos(self) -> Self {
        self.chain(self.val.acos(), -1.0 / (1.0 - self.val * self.val).sqrt())
    }
    fn atan(self) -> Self {
        self.chain(self.val.atan(), 1.0 / (1.0 + self.val * self.val))
    }
    fn atan2(self, other: Self) -> Self {
        let (y, x) = (self.val, other.val);
        let r2 = x * x + y * y;
        Self::new(y.atan2(x), self.zip(other, |dy, dx| (x * dy - y * dx) / r2))
    }
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }

    fn exp_m1(self) -> Self {
        self.chain(self.val.exp_m1(), self.val.exp())
    }
    fn ln_1p(self) -> Self {
        self.chain(self.val.ln_1p(), 1.0 / (1.0 + self.val))
    }
    fn sinh(self) -> Self {
        self.chain(self.val.sinh(), self.val.cosh())
    }
    fn cosh(self) -> Self {
        self.chain(self.val.cosh(), self.val.sinh())
    }
    fn tanh(self) -> Self {
        let t = self.val.tanh();
        self.chain(t, 1.0 - t * t)
    }
    fn asinh(self) -> Self {
        self.chain(self.val.asinh(), 1.0 / (self.val * self.val + 1.0).sqrt())
    }
    fn acosh(self) -> Self {
        self.chain(self.val.acosh(), 1.0 / (self.val * self.val - 1.0).sqrt())
    }
    fn atanh(self) -> Self {
        self.chain(self.val.atanh(), 1.0 / (1.0 - self.val * self.val))
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        self.val.integer_decode()
    }
}
