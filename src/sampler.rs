//! Capability traits shared by every sampler.

use rand::distr::Distribution;
use rand::Rng;

use crate::{Matrix, Vector};

/// A random variate generator driven by a separable parameter set.
///
/// Drawing goes through [`Distribution::sample`], so samplers plug into
/// anything that accepts a `rand` distribution (`rng.sample(&sampler)`,
/// `sampler.sample_iter(rng)`, ...). Samplers hold no mutable state while
/// drawing: identical parameters and identically seeded generators give
/// identical output.
///
/// [`Distribution::sample`] is [`Sampler::sample_with`] applied to the
/// sampler's own parameter set.
pub trait Sampler<T>: Distribution<T> {
    /// Validated parameter set type.
    type Params;

    /// Range of values the sampler can produce.
    type Support;

    /// Current parameter set.
    fn params(&self) -> &Self::Params;

    /// Draw one value under `params` instead of the stored set.
    ///
    /// Consumes the generator exactly as a sampler built from `params`
    /// would, and leaves the stored set untouched. Sampler configuration
    /// that is not part of the parameter set (the Gibbs chain length) still
    /// applies.
    fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, params: &Self::Params) -> T;

    /// Replace the parameter set.
    ///
    /// The new set was validated when it was built, so this cannot fail.
    fn set_params(&mut self, params: Self::Params);

    /// Closed range `[min, max]` of the output (per coordinate for
    /// multivariate samplers).
    fn support(&self) -> Self::Support;

    /// Discard any cached state carried between draws.
    ///
    /// The samplers in this crate carry none, so the default does nothing.
    fn reset(&mut self) {}
}

/// Parameter sets of a multivariate family.
pub trait MultivariateParams {
    /// Length of the vectors the parameters describe.
    fn dims(&self) -> usize;
}

/// A sampler producing column vectors of fixed dimension.
pub trait MultivariateSampler:
    Sampler<Vector, Params: MultivariateParams, Support = (Vector, Vector)>
{
    /// Length of each drawn vector.
    fn dims(&self) -> usize {
        self.params().dims()
    }

    /// Draw `n` vectors as the columns of a `dims × n` matrix.
    ///
    /// Columns are filled left to right with single draws, so column `j`
    /// equals the `j`-th value of `sample_iter` on the same generator.
    fn sample_batch<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Matrix {
        self.sample_batch_with(rng, self.params(), n)
    }

    /// [`sample_batch`](Self::sample_batch) under `params` instead of the
    /// stored set; the matrix has `params.dims()` rows.
    fn sample_batch_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        params: &Self::Params,
        n: usize,
    ) -> Matrix {
        let mut out = Matrix::zeros(params.dims(), n);
        for j in 0..n {
            let draw = self.sample_with(rng, params);
            out.set_column(j, &draw);
        }
        out
    }
}
