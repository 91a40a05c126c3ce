///
/// Contains [`convolution::ConvolutionAlgorithm`], an abstraction for algorithms
/// for computing convolutions, together with the implementations used for polynomial
/// multiplication.
///
pub mod convolution;
