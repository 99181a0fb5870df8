//! Python bindings (feature `python`).

use std::cell::RefCell;

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    Float,
    core::{exact::Exact, ode::ODE},
    methods::Method,
    solve::{Options, solve_ode},
};

#[pyclass(name = "OdeResult", module = "odegrid")]
struct PyOdeResult {
    #[pyo3(get)]
    method: String,
    #[pyo3(get)]
    x: Py<PyAny>,
    #[pyo3(get)]
    y: Py<PyAny>,
    #[pyo3(get)]
    y_exact: Option<Py<PyAny>>,
    #[pyo3(get)]
    n: usize,
    #[pyo3(get)]
    h: Float,
    #[pyo3(get)]
    iterations: usize,
    #[pyo3(get)]
    error: Float,
    #[pyo3(get)]
    nfev: usize,
    #[pyo3(get)]
    corrector_stalls: usize,
    #[pyo3(get)]
    success: bool,
    #[pyo3(get)]
    message: String,
}

#[pymethods]
impl PyOdeResult {
    fn __repr__(&self) -> String {
        format!(
            "<OdeResult: method={}, n={}, h={:.6}, iterations={}, error={:e}, success={}>",
            self.method, self.n, self.h, self.iterations, self.error, self.success
        )
    }
}

/// Python callable wrapped as a right-hand side. The first exception raised by
/// the callable is kept and the integrator sees NaN from then on.
struct PythonODE<'py> {
    fun: Bound<'py, PyAny>,
    error: RefCell<Option<PyErr>>,
}

impl ODE for PythonODE<'_> {
    fn ode(&self, x: Float, y: Float) -> Float {
        if self.error.borrow().is_some() {
            return Float::NAN;
        }
        match self.fun.call1((x, y)).and_then(|r| r.extract::<Float>()) {
            Ok(v) => v,
            Err(e) => {
                self.error.replace(Some(e));
                Float::NAN
            }
        }
    }
}

struct PythonExact<'py> {
    fun: Bound<'py, PyAny>,
    error: RefCell<Option<PyErr>>,
}

impl Exact for PythonExact<'_> {
    fn exact(&self, x: Float, x0: Float, y0: Float) -> Float {
        if self.error.borrow().is_some() {
            return Float::NAN;
        }
        match self.fun.call1((x, x0, y0)).and_then(|r| r.extract::<Float>()) {
            Ok(v) => v,
            Err(e) => {
                self.error.replace(Some(e));
                Float::NAN
            }
        }
    }
}

#[pyfunction]
#[pyo3(name = "solve_ode")]
#[pyo3(signature = (fun, x_span, y0, method="rk4", n=10, eps=1e-6, exact=None, max_iterations=20))]
/// Solve y' = fun(x, y), y(x0) = y0 on x_span = (x0, xn) by grid doubling.
///
/// Parameters
/// ----------
/// fun : callable
///     Right-hand side ``fun(x, y) -> float``.
/// x_span : 2-tuple of floats
///     Interval of integration (x0, xn) with xn > x0.
/// y0 : float
///     Initial value.
/// method : string, optional
///     'euler' (Improved Euler), 'rk4' (default) or 'adams'.
/// n : int, optional
///     Number of subintervals of the first grid, > 1.
/// eps : float, optional
///     Accuracy target.
/// exact : callable, optional
///     Closed-form solution ``exact(x, x0, y0) -> float``. Measures the error
///     of 'adams' and fills ``y_exact``.
/// max_iterations : int, optional
///     Ceiling on grid doublings.
fn solve_ode_py<'py>(
    py: Python<'py>,
    fun: Bound<'py, PyAny>,
    x_span: (Float, Float),
    y0: Float,
    method: &str,
    n: usize,
    eps: Float,
    exact: Option<Bound<'py, PyAny>>,
    max_iterations: usize,
) -> PyResult<PyOdeResult> {
    let f = PythonODE {
        fun,
        error: RefCell::new(None),
    };
    let exact = exact.map(|fun| PythonExact {
        fun,
        error: RefCell::new(None),
    });

    let options = Options::builder()
        .method(Method::from(method))
        .n(n)
        .eps(eps)
        .max_iterations(max_iterations)
        .maybe_exact(exact.as_ref().map(|e| e as &dyn Exact))
        .build();

    let sol = solve_ode(&f, x_span.0, x_span.1, y0, options).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        PyValueError::new_err(messages.join("; "))
    })?;

    if let Some(err) = f.error.take() {
        return Err(err);
    }
    if let Some(err) = exact.as_ref().and_then(|e| e.error.take()) {
        return Err(err);
    }

    let success = sol.converged();
    let message = if success {
        format!("Reached eps = {} after {} refinements.", eps, sol.iterations)
    } else {
        format!("Accuracy not reached within {} refinements.", sol.iterations)
    };

    Ok(PyOdeResult {
        method: sol.method.to_string(),
        x: PyArray1::from_vec(py, sol.x).into_any().unbind(),
        y: PyArray1::from_vec(py, sol.y).into_any().unbind(),
        y_exact: sol
            .y_exact
            .map(|ye| PyArray1::from_vec(py, ye).into_any().unbind()),
        n: sol.n,
        h: sol.h,
        iterations: sol.iterations,
        error: sol.error,
        nfev: sol.nfev,
        corrector_stalls: sol.corrector_stalls,
        success,
        message,
    })
}

#[pymodule]
fn odegrid(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_ode_py, m)?)?;
    m.add_class::<PyOdeResult>()?;
    Ok(())
}
