//! Mars: heliocentric ecliptic L, B, R of date (VSOP87D, truncated).
//!
//! Rows are `[A, B, C]` with A in 1e-8 rad (L, B) or 1e-8 AU (R).

use crate::table::SeriesBody;
use crate::term::{BodySeries, CoordinateSeries, Term};

#[rustfmt::skip]
const L0: &[Term] = &[
    [620347712.0, 0.0,        0.0],
    [18656368.0,  5.05037100, 3340.61242670],
    [1108217.0,   5.4009984,  6681.2248534],
    [91798.0,     5.75479,    10021.83728],
    [27745.0,     5.97050,    3.52312],
    [12316.0,     0.84956,    2810.92146],
    [10610.0,     2.93959,    2281.23050],
    [8927.0,      4.1570,     0.0173],
    [8716.0,      6.1101,     13362.4497],
    [7775.0,      3.3397,     5621.8429],
    [6798.0,      0.3646,     398.1490],
    [4161.0,      0.2281,     2942.4634],
    [3575.0,      1.6619,     2544.3144],
    [3075.0,      0.8570,     191.4483],
    [2938.0,      6.0789,     0.0673],
    [2628.0,      0.6481,     3337.0893],
    [2580.0,      0.0300,     3344.1355],
    [2389.0,      5.0390,     796.2980],
    [1799.0,      0.6563,     529.6910],
    [1546.0,      2.9158,     1751.5395],
    [1528.0,      1.1498,     6151.5339],
    [1286.0,      3.0680,     2146.1654],
    [1264.0,      3.6228,     5092.1520],
    [1025.0,      3.6933,     8962.4553],
    [892.0,       0.183,      16703.062],
    [859.0,       2.401,      2914.014],
    [833.0,       4.495,      3340.630],
    [833.0,       2.464,      3340.595],
    [749.0,       3.822,      155.420],
    [724.0,       0.675,      3738.761],
    [713.0,       3.663,      1059.382],
    [655.0,       0.489,      3127.313],
    [636.0,       2.922,      8432.764],
    [553.0,       4.475,      1748.016],
    [550.0,       3.810,      0.980],
    [472.0,       3.625,      1194.447],
    [426.0,       0.554,      6283.076],
    [415.0,       0.497,      213.299],
    [312.0,       0.999,      6677.702],
    [307.0,       0.381,      6684.748],
    [302.0,       4.486,      3532.061],
    [299.0,       2.783,      6254.627],
    [293.0,       4.221,      20.775],
    [284.0,       5.769,      3149.164],
    [281.0,       5.882,      1349.867],
    [274.0,       0.542,      3340.545],
    [274.0,       0.134,      3340.680],
    [239.0,       5.372,      4136.910],
    [236.0,       5.755,      3333.499],
    [231.0,       1.282,      3870.303],
    [221.0,       3.505,      382.897],
    [204.0,       2.821,      1221.849],
    [193.0,       3.357,      3.590],
    [189.0,       1.491,      9492.146],
    [179.0,       1.006,      951.718],
    [174.0,       2.414,      553.569],
    [172.0,       0.439,      5486.778],
    [160.0,       3.949,      4562.461],
    [144.0,       1.419,      135.065],
    [140.0,       3.326,      2700.715],
    [138.0,       4.301,      7.114],
    [131.0,       4.045,      12303.068],
    [128.0,       2.208,      1592.596],
    [128.0,       1.807,      5088.629],
    [117.0,       3.128,      7903.073],
    [113.0,       3.701,      1589.073],
    [110.0,       1.052,      242.729],
    [105.0,       0.785,      8827.390],
    [100.0,       3.243,      11773.377],
];

#[rustfmt::skip]
const L1: &[Term] = &[
    [334085627474.0, 0.0,       0.0],
    [1458227.0,      3.6042605, 3340.6124267],
    [164901.0,       3.926313,  6681.224853],
    [19963.0,        4.26594,   10021.83728],
    [3452.0,         4.7321,    3.5231],
    [2485.0,         4.6128,    13362.4497],
    [842.0,          4.459,     2281.230],
    [538.0,          5.016,     398.149],
    [521.0,          4.994,     3344.136],
    [433.0,          2.561,     191.448],
    [430.0,          5.316,     155.420],
    [382.0,          3.539,     796.298],
    [314.0,          4.963,     16703.062],
    [283.0,          3.160,     2544.314],
    [206.0,          4.569,     2146.165],
    [169.0,          1.329,     3337.089],
    [158.0,          4.185,     1751.540],
    [134.0,          2.233,     0.980],
    [134.0,          5.974,     1748.016],
    [118.0,          6.024,     6151.534],
    [117.0,          2.213,     1059.382],
    [114.0,          2.129,     1194.447],
    [114.0,          5.428,     3738.761],
    [91.0,           1.10,      1349.87],
    [85.0,           3.91,      553.57],
    [83.0,           5.30,      6684.75],
    [81.0,           4.43,      529.69],
    [80.0,           2.25,      8962.46],
    [73.0,           2.50,      951.72],
    [73.0,           5.84,      242.73],
    [71.0,           3.86,      2914.01],
    [68.0,           5.02,      382.90],
    [65.0,           1.02,      3340.60],
    [65.0,           3.05,      3340.63],
    [62.0,           4.15,      3149.16],
    [57.0,           3.89,      4136.91],
    [48.0,           4.87,      213.30],
    [48.0,           1.18,      3333.50],
    [47.0,           1.31,      3185.19],
    [41.0,           0.71,      1592.60],
    [40.0,           2.73,      7.11],
    [40.0,           5.32,      20043.67],
    [33.0,           5.41,      6283.08],
    [28.0,           0.05,      9492.15],
    [27.0,           3.89,      1221.85],
    [27.0,           5.11,      2700.72],
];

#[rustfmt::skip]
const L2: &[Term] = &[
    [58016.0, 2.04979, 3340.61243],
    [54188.0, 0.0,     0.0],
    [13908.0, 2.45742, 6681.22485],
    [2465.0,  2.8000,  10021.8373],
    [398.0,   3.141,   13362.450],
    [222.0,   3.194,   3.523],
    [121.0,   0.543,   155.420],
    [62.0,    3.49,    16703.06],
    [54.0,    3.54,    3344.14],
    [34.0,    6.00,    2281.23],
    [32.0,    4.14,    191.45],
    [30.0,    2.00,    796.30],
    [23.0,    4.33,    242.73],
    [22.0,    3.45,    398.15],
    [20.0,    5.42,    553.57],
    [16.0,    0.66,    0.98],
    [16.0,    6.11,    2146.17],
    [16.0,    1.22,    1748.02],
    [15.0,    6.10,    3185.19],
    [14.0,    4.02,    951.72],
    [14.0,    2.62,    1349.87],
    [13.0,    0.60,    1194.45],
    [12.0,    3.86,    6684.75],
    [11.0,    4.72,    2544.31],
    [10.0,    0.25,    382.90],
    [9.0,     0.68,    1059.38],
    [9.0,     3.83,    20043.67],
    [9.0,     3.88,    3738.76],
    [8.0,     5.46,    1751.54],
    [7.0,     2.58,    3149.16],
    [7.0,     2.38,    4136.91],
    [6.0,     5.48,    1592.60],
    [6.0,     2.34,    3097.88],
];

#[rustfmt::skip]
const L3: &[Term] = &[
    [1482.0, 0.4443, 3340.6124],
    [662.0,  0.885,  6681.225],
    [188.0,  1.288,  10021.837],
    [41.0,   1.65,   13362.45],
    [26.0,   0.0,    0.0],
    [23.0,   2.05,   155.42],
    [10.0,   1.58,   3.52],
    [8.0,    2.00,   16703.06],
    [5.0,    2.82,   242.73],
    [4.0,    2.02,   3344.14],
    [3.0,    4.59,   3185.19],
    [3.0,    0.65,   553.57],
];

#[rustfmt::skip]
const L4: &[Term] = &[
    [114.0, 3.1416, 0.0],
    [29.0,  5.64,   6681.22],
    [24.0,  5.14,   3340.61],
    [11.0,  6.03,   10021.84],
    [3.0,   0.13,   13362.45],
    [3.0,   3.56,   155.42],
    [1.0,   0.49,   16703.06],
    [1.0,   1.32,   242.73],
];

#[rustfmt::skip]
const L5: &[Term] = &[
    [1.0, 3.14, 0.0],
    [1.0, 4.04, 6681.22],
];

#[rustfmt::skip]
const B0: &[Term] = &[
    [3197135.0, 3.7683204, 3340.6124267],
    [298033.0,  4.106170,  6681.224853],
    [289105.0,  0.0,       0.0],
    [31366.0,   4.44651,   10021.83728],
    [3484.0,    4.7881,    13362.4497],
    [443.0,     5.026,     3344.136],
    [443.0,     5.652,     3337.089],
    [399.0,     5.131,     16703.062],
    [293.0,     3.793,     2281.230],
    [182.0,     6.136,     6151.534],
    [163.0,     4.264,     529.691],
    [160.0,     2.232,     1059.382],
    [149.0,     2.165,     5621.843],
    [143.0,     1.182,     3340.595],
    [143.0,     3.213,     3340.630],
    [139.0,     2.418,     8962.455],
];

#[rustfmt::skip]
const B1: &[Term] = &[
    [350069.0, 5.368478, 3340.612427],
    [14116.0,  3.14159,  0.0],
    [9671.0,   5.4788,   6681.2249],
    [1472.0,   3.2021,   10021.8373],
    [426.0,    3.408,    13362.450],
    [102.0,    0.776,    3337.089],
    [79.0,     3.72,     16703.06],
    [33.0,     3.46,     5621.84],
    [26.0,     2.48,     2281.23],
];

#[rustfmt::skip]
const B2: &[Term] = &[
    [16727.0, 0.60221, 3340.61243],
    [4987.0,  3.1416,  0.0],
    [302.0,   5.559,   6681.225],
    [26.0,    1.90,    13362.45],
    [21.0,    0.92,    10021.84],
    [12.0,    2.24,    3340.63],
    [8.0,     2.25,    16703.06],
];

#[rustfmt::skip]
const B3: &[Term] = &[
    [607.0, 1.981, 3340.612],
    [43.0,  0.0,   0.0],
    [14.0,  1.80,  6681.22],
    [3.0,   3.45,  10021.84],
];

#[rustfmt::skip]
const B4: &[Term] = &[
    [13.0, 0.0,  0.0],
    [11.0, 3.46, 3340.61],
    [1.0,  0.50, 6681.22],
];

#[rustfmt::skip]
const R0: &[Term] = &[
    [153033488.0, 0.0,        0.0],
    [14184953.0,  3.47971284, 3340.61242670],
    [660776.0,    3.817834,   6681.224853],
    [46179.0,     4.15595,    10021.83728],
    [8110.0,      5.5596,     2810.9215],
    [7485.0,      1.7724,     5621.8429],
    [5523.0,      1.3644,     2281.2305],
    [3825.0,      4.4941,     13362.4497],
    [2484.0,      4.9255,     2942.4634],
    [2307.0,      0.0908,     2544.3144],
    [1999.0,      5.3606,     3337.0893],
    [1960.0,      4.7425,     3344.1355],
    [1167.0,      2.1126,     5092.1520],
    [1103.0,      5.0091,     398.1490],
    [992.0,       5.839,      6151.534],
    [899.0,       4.408,      529.691],
    [807.0,       2.102,      1059.382],
    [798.0,       3.448,      796.298],
    [741.0,       1.499,      2146.165],
    [726.0,       1.245,      8432.764],
    [692.0,       2.134,      8962.455],
    [633.0,       0.894,      3340.595],
    [633.0,       2.924,      3340.630],
    [630.0,       1.287,      1751.540],
    [574.0,       0.829,      2914.014],
    [526.0,       5.383,      3738.761],
    [473.0,       5.199,      3127.313],
    [348.0,       4.832,      16703.062],
    [284.0,       2.907,      3532.061],
    [280.0,       5.257,      6283.076],
    [276.0,       1.218,      6254.627],
    [275.0,       2.908,      1748.016],
    [270.0,       3.764,      5884.927],
    [239.0,       2.037,      1194.447],
    [234.0,       5.105,      5486.778],
    [228.0,       3.255,      6872.673],
    [223.0,       4.199,      3149.164],
    [219.0,       5.583,      191.448],
    [208.0,       5.255,      3340.545],
    [208.0,       4.846,      3340.680],
    [186.0,       5.699,      6677.702],
    [183.0,       5.081,      6684.748],
    [179.0,       4.184,      3333.499],
    [176.0,       5.953,      3870.303],
    [164.0,       3.799,      4136.910],
];

#[rustfmt::skip]
const R1: &[Term] = &[
    [1107433.0, 2.0325052, 3340.6124267],
    [103176.0,  2.370718,  6681.224853],
    [12877.0,   0.0,       0.0],
    [10816.0,   2.70888,   10021.83728],
    [1195.0,    3.0470,    13362.4497],
    [439.0,     2.888,     2281.230],
    [396.0,     3.423,     3344.136],
    [183.0,     1.584,     2544.314],
    [136.0,     3.385,     16703.062],
    [128.0,     6.043,     3337.089],
    [128.0,     0.630,     1059.382],
    [127.0,     1.954,     796.298],
    [118.0,     2.998,     2146.165],
    [88.0,      3.42,      398.15],
    [83.0,      3.86,      3738.76],
    [76.0,      4.45,      6151.53],
    [72.0,      2.76,      529.69],
    [67.0,      2.55,      1751.54],
    [66.0,      4.41,      1748.02],
    [58.0,      0.54,      1194.45],
    [54.0,      0.68,      8962.46],
    [51.0,      3.73,      6684.75],
    [49.0,      5.73,      3340.60],
    [49.0,      1.48,      3340.63],
    [48.0,      2.58,      3149.16],
    [48.0,      2.29,      2914.01],
    [39.0,      2.32,      4136.91],
];

#[rustfmt::skip]
const R2: &[Term] = &[
    [44242.0, 0.47931, 3340.61243],
    [8138.0,  0.8700,  6681.2249],
    [1275.0,  1.2259,  10021.8373],
    [187.0,   1.573,   13362.450],
    [52.0,    3.14,    0.0],
    [41.0,    1.97,    3344.14],
    [27.0,    1.92,    16703.06],
    [18.0,    4.43,    2281.23],
    [12.0,    4.53,    3185.19],
    [10.0,    5.39,    1059.38],
    [10.0,    0.42,    796.30],
];

#[rustfmt::skip]
const R3: &[Term] = &[
    [1113.0, 5.1499, 3340.6124],
    [424.0,  5.613,  6681.225],
    [100.0,  5.997,  10021.837],
    [20.0,   0.08,   13362.45],
    [5.0,    3.14,   0.0],
    [3.0,    0.43,   16703.06],
];

#[rustfmt::skip]
const R4: &[Term] = &[
    [20.0, 3.58, 3340.61],
    [16.0, 4.05, 6681.22],
    [6.0,  4.46, 10021.84],
    [2.0,  4.84, 13362.45],
];

pub static MARS: BodySeries = BodySeries {
    body: SeriesBody::Mars,
    longitude: CoordinateSeries { groups: &[L0, L1, L2, L3, L4, L5] },
    latitude: CoordinateSeries { groups: &[B0, B1, B2, B3, B4] },
    radius: CoordinateSeries { groups: &[R0, R1, R2, R3, R4] },
};
