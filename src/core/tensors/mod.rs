//! ndarray ↔ candle 텐서 변환
//!
//! 호스트 측 행렬(그래프 속성, centroid 전략 입출력)은 ndarray,
//! 미분이 필요한 값은 candle 텐서로 다룬다.

use crate::error::Result;
use candle_core::{Device, Tensor};
use ndarray::{Array2, ArrayView2};

/// 2차원 배열을 (rows, cols) f32 텐서로 복사
pub fn array_to_tensor(array: ArrayView2<'_, f32>, device: &Device) -> Result<Tensor> {
    let data: Vec<f32> = array.iter().copied().collect();
    Ok(Tensor::from_vec(data, array.dim(), device)?)
}

/// 2차원 텐서를 분리(detach)된 호스트 배열로 복사
pub fn tensor_to_array(tensor: &Tensor) -> Result<Array2<f32>> {
    let (rows, cols) = tensor.dims2()?;
    let data = tensor.flatten_all()?.to_vec1::<f32>()?;
    Ok(Array2::from_shape_vec((rows, cols), data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn conversion_keeps_row_major_layout() {
        let a = array![[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let t = array_to_tensor(a.view(), &Device::Cpu).unwrap();
        assert_eq!(t.dims2().unwrap(), (2, 3));
        assert_eq!(t.to_vec2::<f32>().unwrap()[1], vec![4.0, 5.0, 6.0]);
        assert_eq!(tensor_to_array(&t).unwrap(), a);
    }
}
