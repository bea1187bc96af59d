// Filters turn one field into another field of the same size
pub mod custom_gradient;
pub mod linear_gradient;
pub mod normalize;

use std::marker::PhantomData;

use crate::grid::Grid;

pub use custom_gradient::{ColorRange, CustomGradientFilter};
pub use linear_gradient::LinearGradientFilter;
pub use normalize::NormalizeFilter;

// Maps a Grid<T> to a new Grid<U> with the same dimensions.
// The input is never modified.
pub trait NoiseFilter<T, U> {
    fn filter(&self, field: &Grid<T>) -> Grid<U>;

    // Feed this filter's output into `next`
    fn then<V, F>(self, next: F) -> FilterChain<Self, F, U>
    where
        Self: Sized,
        F: NoiseFilter<U, V>,
    {
        FilterChain {
            first: self,
            second: next,
            _between: PhantomData,
        }
    }
}

// Two filters run back to back; `M` is the intermediate cell type
pub struct FilterChain<A, B, M> {
    first: A,
    second: B,
    _between: PhantomData<fn() -> M>,
}

impl<T, M, U, A, B> NoiseFilter<T, U> for FilterChain<A, B, M>
where
    A: NoiseFilter<T, M>,
    B: NoiseFilter<M, U>,
{
    fn filter(&self, field: &Grid<T>) -> Grid<U> {
        let between = self.first.filter(field);
        self.second.filter(&between)
    }
}

impl<T, U, F: NoiseFilter<T, U> + ?Sized> NoiseFilter<T, U> for &F {
    fn filter(&self, field: &Grid<T>) -> Grid<U> {
        (**self).filter(field)
    }
}

impl<T, U> NoiseFilter<T, U> for Box<dyn NoiseFilter<T, U> + '_> {
    fn filter(&self, field: &Grid<T>) -> Grid<U> {
        (**self).filter(field)
    }
}
